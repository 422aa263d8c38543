//! JSON output formatting

use super::OutputRenderer;
use crate::error::GuardrailsError;
use crate::rules::EvaluationReport;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonOutput {
    fn render(&self, report: &EvaluationReport) -> Result<String, GuardrailsError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
