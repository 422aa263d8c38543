//! Terminal output formatting with colors

use colored::Colorize;

use super::OutputRenderer;
use crate::error::GuardrailsError;
use crate::rules::{EvaluationReport, EvaluationResult, Severity};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, report: &EvaluationReport) -> String {
        let mut output = format!(
            "\n{} v{}\n\n",
            "guardrails".cyan().bold(),
            report.metadata.version
        );

        match &report.metadata.command {
            Some(command) => {
                output.push_str(&format!(
                    "{} {}\n",
                    "Command:".dimmed(),
                    command.white().bold()
                ));
            }
            None => {
                output.push_str(&format!(
                    "{} {}\n",
                    "Directory:".dimmed(),
                    report.metadata.cwd.white().bold()
                ));
            }
        }

        output
    }

    fn format_results(&self, report: &EvaluationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  EVALUATION RESULTS".bold()
        ));

        if report.is_clean() {
            output.push_str(&format!("  {}\n", "No guardrails triggered.".green()));
            return output;
        }

        let errors: Vec<_> = report.results_by_severity(Severity::Error).collect();
        if !errors.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "❌ ERRORS".red().bold(),
                errors.len()
            ));
            for result in errors {
                output.push_str(&self.format_result(result));
            }
            output.push('\n');
        }

        let warnings: Vec<_> = report.results_by_severity(Severity::Warning).collect();
        if !warnings.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "⚠️  WARNINGS".yellow().bold(),
                warnings.len()
            ));
            for result in warnings {
                output.push_str(&self.format_result(result));
            }
            output.push('\n');
        }

        let info: Vec<_> = report.results_by_severity(Severity::Info).collect();
        if !info.is_empty() {
            output.push_str(&format!("{} ({})\n", "ℹ️  INFO".blue().bold(), info.len()));
            for result in info {
                output.push_str(&self.format_result(result));
            }
            output.push('\n');
        }

        output
    }

    fn format_result(&self, result: &EvaluationResult) -> String {
        let mut output = format!(
            "  {} [{}] {} {}\n",
            "•".dimmed(),
            result.rule_id.cyan(),
            result.action.label().bold(),
            result.message
        );

        if let Some(suggestion) = &result.suggestion {
            output.push_str(&format!(
                "    {} try: {}\n",
                "└─".dimmed(),
                suggestion.green()
            ));
        }

        if let Some(flag) = &result.bypass_flag {
            output.push_str(&format!(
                "    {} bypass with: {}\n",
                "└─".dimmed(),
                flag.yellow()
            ));
        }

        output
    }

    fn format_summary(&self, report: &EvaluationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        output.push_str(&format!(
            "Blocked: {} │ Warnings: {} │ Allowed: {}\n",
            report.summary.blocked.to_string().red().bold(),
            report.summary.warnings.to_string().yellow().bold(),
            report.summary.allowed.to_string().blue().bold()
        ));

        if report.has_blocking() {
            output.push_str(&format!(
                "\n{} Command blocked. Supply the listed bypass flag to proceed anyway.\n",
                "✗".red().bold()
            ));
        } else if report.is_clean() {
            output.push_str(&format!("\n{} All clear.\n", "✓".green().bold()));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for TerminalOutput {
    fn render(&self, report: &EvaluationReport) -> Result<String, GuardrailsError> {
        let mut output = String::new();

        output.push_str(&self.format_header(report));
        output.push_str(&self.format_results(report));
        output.push_str(&self.format_summary(report));

        Ok(output)
    }
}
