//! Output formatting module for CLI

pub mod json;
pub mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::GuardrailsError;
use crate::rules::EvaluationReport;

/// Trait for rendering an evaluation report
pub trait OutputRenderer {
    fn render(&self, report: &EvaluationReport) -> Result<String, GuardrailsError>;
}
