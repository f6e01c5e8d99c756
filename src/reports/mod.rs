//! Report generation modules for version selection results
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::ModGraphError;
use crate::selection::Selection;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from version selection results
    fn generate_report(&self, selection: &Selection) -> Result<String, ModGraphError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
