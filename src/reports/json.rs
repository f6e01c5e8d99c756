//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::ModGraphError;
use crate::selection::Selection;

#[derive(Serialize)]
struct SelectionReport<'a> {
    selected_count: usize,
    superseded_count: usize,
    #[serde(flatten)]
    selection: &'a Selection,
}

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, selection: &Selection) -> Result<String, ModGraphError> {
        let report = SelectionReport {
            selected_count: selection.selected().len(),
            superseded_count: selection.superseded().len(),
            selection,
        };

        serde_json::to_string_pretty(&report).map_err(ModGraphError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::graph::ModuleGraphBuilder;
    use crate::selection::classify;

    fn create_test_selection() -> Selection {
        let graph = ModuleGraphBuilder::from_lines([
            "main m@v1.0.0",
            "main n@v1.0.0",
            "n@v1.0.0 m@v2.0.0",
        ])
        .unwrap();
        classify(&graph)
    }

    #[test]
    fn test_json_report_empty_selection() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&Selection::default()).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["selected_count"], 0);
        assert_eq!(json["superseded_count"], 0);
        assert_eq!(json["selected"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_selection() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&create_test_selection()).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["selected_count"], 2);
        assert_eq!(json["superseded_count"], 1);
        assert_eq!(json["selected"], json!(["m@v2.0.0", "n@v1.0.0"]));
        assert_eq!(json["superseded"], json!(["m@v1.0.0"]));
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&create_test_selection()).unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }

    #[test]
    fn test_json_report_default_trait() {
        let selection = create_test_selection();
        let report1 = JsonReportGenerator.generate_report(&selection).unwrap();
        let report2 = JsonReportGenerator::new().generate_report(&selection).unwrap();

        assert_eq!(report1, report2);
    }
}
