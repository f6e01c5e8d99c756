//! Core graph types
//!
//! This module contains the node type stored in the module graph and the
//! helpers that interpret a node name as a `module@version` pair.

use crate::constants::graph::VERSION_DELIMITER;

/// Represents a module in the dependency graph
///
/// A node is identified only by its name. Names of the form `module@version`
/// are versioned; anything without the delimiter (typically the main module
/// at the root) is unversioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    name: String,
}

impl ModuleNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module path without the version suffix
    pub fn module(&self) -> &str {
        split_version(&self.name).map_or(self.name.as_str(), |(module, _)| module)
    }

    /// Version token, if the name carries one
    pub fn version(&self) -> Option<&str> {
        split_version(&self.name).map(|(_, version)| version)
    }

    pub fn is_versioned(&self) -> bool {
        self.version().is_some()
    }
}

/// Split a node name at the first version delimiter
///
/// Returns `None` for unversioned names.
pub fn split_version(name: &str) -> Option<(&str, &str)> {
    name.split_once(VERSION_DELIMITER)
}
