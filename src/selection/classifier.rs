//! Version selection over `module@version` node names
//!
//! For every module the greatest version seen is selected; every other
//! version of that module is recorded as superseded. The scan is a single
//! streaming pass: when a higher version shows up, the previous best is
//! demoted on the spot instead of re-reading the input.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use semver::Version;
use serde::Serialize;

use crate::constants::graph::VERSION_DELIMITER;
use crate::graph::{ModuleGraph, split_version};

/// Outcome of version selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    selected: Vec<String>,
    superseded: Vec<String>,
}

impl Selection {
    /// One entry per module, sorted by `module@version`
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Losing versions in the order they were demoted
    pub fn superseded(&self) -> &[String] {
        &self.superseded
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|n| n == name)
    }

    pub fn is_superseded(&self, name: &str) -> bool {
        self.superseded.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.superseded.is_empty()
    }
}

/// Streaming classifier that picks the greatest version per module
#[derive(Debug, Default)]
pub struct VersionClassifier {
    seen: HashSet<String>,
    best: HashMap<String, String>,
    superseded: Vec<String>,
}

impl VersionClassifier {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            best: HashMap::new(),
            superseded: Vec::new(),
        }
    }

    /// Feed one node name
    ///
    /// Names are considered once; repeats and unversioned names are ignored.
    /// On a tie the version seen first stays selected.
    pub fn observe(&mut self, name: &str) {
        if !self.seen.insert(name.to_string()) {
            return;
        }

        let Some((module, version)) = split_version(name) else {
            return;
        };

        match self.best.get_mut(module) {
            Some(best) => {
                if compare_versions(best, version) == Ordering::Less {
                    self.superseded
                        .push(format!("{module}{VERSION_DELIMITER}{best}"));
                    *best = version.to_string();
                } else {
                    self.superseded.push(name.to_string());
                }
            }
            None => {
                self.best.insert(module.to_string(), version.to_string());
            }
        }
    }

    /// Feed both endpoints of an edge, source first
    pub fn observe_edge(&mut self, from: &str, to: &str) {
        self.observe(from);
        self.observe(to);
    }

    pub fn finish(self) -> Selection {
        let mut selected: Vec<String> = self
            .best
            .into_iter()
            .map(|(module, version)| format!("{module}{VERSION_DELIMITER}{version}"))
            .collect();
        selected.sort();

        Selection {
            selected,
            superseded: self.superseded,
        }
    }
}

/// Classify every versioned node of `graph`, scanning edges in input order
pub fn classify(graph: &ModuleGraph) -> Selection {
    let mut classifier = VersionClassifier::new();
    for (from, to) in graph.edges() {
        classifier.observe_edge(from, to);
    }
    classifier.finish()
}

/// Compare two version tokens by semantic version precedence
///
/// A leading `v` is optional, `1` and `1.2` are read as `1.0.0` and `1.2.0`,
/// and build metadata is ignored. Tokens that are not versions sort below
/// every valid version and equal to each other.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => a.cmp_precedence(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn parse_version(token: &str) -> Option<Version> {
    let trimmed = token.strip_prefix('v').unwrap_or(token);
    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    let is_shorthand = parts.len() < 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if !is_shorthand {
        return None;
    }

    let padded = format!("{trimmed}{}", ".0".repeat(3 - parts.len()));
    Version::parse(&padded).ok()
}
