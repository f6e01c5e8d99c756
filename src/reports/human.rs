//! Human-readable console report generation

use std::collections::BTreeMap;
use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::ModGraphError;
use crate::graph::split_version;
use crate::selection::Selection;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, selection: &Selection) -> Result<String, ModGraphError> {
        let mut output = String::new();

        if selection.is_empty() {
            writeln!(
                output,
                "\n{} No versioned modules found in the graph.",
                style("ℹ").blue()
            )?;
            return Ok(output);
        }

        // module -> superseded versions, in demotion order
        let mut losers: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for name in selection.superseded() {
            if let Some((module, version)) = split_version(name) {
                losers.entry(module).or_default().push(version);
            }
        }

        let selected_count = selection.selected().len();
        let superseded_count = selection.superseded().len();
        writeln!(
            output,
            "\n{} {} {} selected, {} superseded {}:\n",
            style("📦").blue(),
            style(selected_count).green().bold(),
            pluralize("module", selected_count),
            style(superseded_count).dim(),
            pluralize("version", superseded_count)
        )?;

        for name in selection.selected() {
            let Some((module, version)) = split_version(name) else {
                continue;
            };

            match losers.get(module) {
                Some(versions) => writeln!(
                    output,
                    "  {} {} {} (over {})",
                    style("✓").green(),
                    style(module).bold(),
                    style(version).green(),
                    versions.join(", ")
                )?,
                None => writeln!(
                    output,
                    "  {} {} {}",
                    style("✓").green(),
                    style(module).bold(),
                    style(version).green()
                )?,
            }
        }

        Ok(output)
    }
}
