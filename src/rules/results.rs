//! # Evaluation Result Structures
//!
//! This module defines the data structures for representing rule decisions
//! and evaluation reports.
//!
//! ## Overview
//!
//! - [`Severity`] - Violation severity levels (Error, Warning, Info)
//! - [`Action`] - The decision a result carries (Allow, Warn, Block)
//! - [`EvaluationResult`] - Individual rule decision with suggestion and bypass flag
//! - [`EvaluationReport`] - Envelope around one evaluation run
//!
//! ## Examples
//!
//! ### Creating Results
//!
//! ```rust
//! use guardrails::rules::{Action, EvaluationResult, Severity};
//!
//! let result = EvaluationResult::new(
//!     "safe-rm-intercept",
//!     Action::Warn,
//!     Severity::Warning,
//!     "Detected 'rm' command",
//! )
//! .with_suggestion("trash -rf ./build");
//!
//! assert_eq!(result.action, Action::Warn);
//! ```

use serde::{Deserialize, Serialize};

use crate::context::RuleContext;

/// Severity levels for rule violations.
///
/// Severity drives the default action a violation maps to and the order
/// results are presented in:
///
/// - **Error** - Must be dealt with before the command runs (default BLOCK)
/// - **Warning** - Worth a hard look before proceeding (default WARN)
/// - **Info** - Advisory only (default ALLOW)
///
/// The variants are declared most-severe first, so an ascending sort over
/// severities puts errors before warnings before infos. Ties between results
/// of equal severity preserve rule registration order.
///
/// # Examples
///
/// ```rust
/// use guardrails::rules::Severity;
///
/// assert!(Severity::Error < Severity::Warning);
/// assert_eq!(Severity::from_string("warn"), Some(Severity::Warning));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violations that gate the command by default.
    /// Examples: discarding all uncommitted work, destructive system paths.
    Error,
    /// Violations that deserve attention but don't gate by default.
    /// Examples: recursive deletes outside scratch space, force pushes.
    Warning,
    /// Advisory findings.
    /// Examples: modern-tool suggestions.
    Info,
}

impl Severity {
    /// Parse a severity from its config-file spelling.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "critical" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" | "information" | "note" => Some(Self::Info),
            _ => None,
        }
    }

    /// Lowercase name as used in config files and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// The decision attached to a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Let the command proceed; the result is advisory.
    Allow,
    /// Let the command proceed but surface the violation prominently.
    Warn,
    /// Refuse the command unless a bypass flag is honored.
    Block,
}

impl Action {
    /// Default mapping from severity, used by rule kinds without their own
    /// action policy: error blocks, warning warns, info allows.
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Block,
            Severity::Warning => Self::Warn,
            Severity::Info => Self::Allow,
        }
    }

    /// Uppercase label for terminal rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::Warn => "WARN",
            Self::Block => "BLOCK",
        }
    }
}

/// A single rule decision produced during evaluation.
///
/// Results are created by rules when their pattern matches and no whitelist
/// entry suppresses the match. They carry everything a reporter needs to
/// present the violation and everything the fix flow needs to act on it.
///
/// # Examples
///
/// ```rust
/// use guardrails::rules::{Action, EvaluationResult, Severity};
///
/// let result = EvaluationResult::new(
///     "safe-git-restore-dot",
///     Action::Block,
///     Severity::Error,
///     "'git restore .' discards ALL changes",
/// )
/// .with_bypass_flag("--i-know-what-im-doing");
///
/// assert!(result.bypass_flag.is_some());
/// assert!(!result.fixable);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The decision for this violation.
    pub action: Action,

    /// Id of the rule that produced the result.
    pub rule_id: String,

    /// Short message describing the violation.
    pub message: String,

    /// Remediation with placeholders already substituted.
    pub suggestion: Option<String>,

    /// Severity of the violation.
    pub severity: Severity,

    /// Override token that downgrades the block when supplied by the caller.
    pub bypass_flag: Option<String>,

    /// Whether the fix flow may attempt this violation.
    #[serde(default)]
    pub fixable: bool,
}

impl EvaluationResult {
    /// Create a new result
    pub fn new(
        rule_id: impl Into<String>,
        action: Action,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            action,
            rule_id: rule_id.into(),
            message: message.into(),
            suggestion: None,
            severity,
            bypass_flag: None,
            fixable: false,
        }
    }

    /// Set the substituted suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the bypass flag token
    pub fn with_bypass_flag(mut self, flag: impl Into<String>) -> Self {
        self.bypass_flag = Some(flag.into());
        self
    }

    /// Mark the result as attemptable by the fix flow
    pub fn fixable(mut self) -> Self {
        self.fixable = true;
        self
    }
}

/// Metadata block of an [`EvaluationReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version that produced the report.
    pub version: String,

    /// RFC 3339 timestamp of the evaluation.
    pub generated_at: String,

    /// Working directory the context was built from.
    pub cwd: String,

    /// The checked command, absent for project-state evaluations.
    pub command: Option<String>,
}

/// Summary counts of an [`EvaluationReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of enabled rules that ran.
    pub rules_evaluated: usize,

    /// Results carrying [`Action::Block`].
    pub blocked: usize,

    /// Results carrying [`Action::Warn`].
    pub warnings: usize,

    /// Results carrying [`Action::Allow`].
    pub allowed: usize,
}

/// Envelope around one evaluation run, ready for JSON serialization.
///
/// # Examples
///
/// ```rust
/// use guardrails::context::RuleContext;
/// use guardrails::rules::{Action, EvaluationReport, EvaluationResult, Severity};
///
/// let context = RuleContext::for_command("rm -rf ./x", vec!["-rf".into(), "./x".into()]);
/// let results = vec![EvaluationResult::new(
///     "safe-rm-intercept",
///     Action::Warn,
///     Severity::Warning,
///     "Detected 'rm' command",
/// )];
///
/// let report = EvaluationReport::new(&context, 9, results);
/// assert_eq!(report.summary.warnings, 1);
/// assert!(!report.has_blocking());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Report metadata.
    pub metadata: ReportMetadata,

    /// Summary counts.
    pub summary: ReportSummary,

    /// Ordered results of the evaluation.
    results: Vec<EvaluationResult>,
}

impl EvaluationReport {
    /// Build a report around the ordered results of one evaluation.
    pub fn new(context: &RuleContext, rules_evaluated: usize, results: Vec<EvaluationResult>) -> Self {
        let count = |action: Action| results.iter().filter(|r| r.action == action).count();

        Self {
            metadata: ReportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: chrono::Utc::now().to_rfc3339(),
                cwd: context.cwd.display().to_string(),
                command: context.command.clone(),
            },
            summary: ReportSummary {
                rules_evaluated,
                blocked: count(Action::Block),
                warnings: count(Action::Warn),
                allowed: count(Action::Allow),
            },
            results,
        }
    }

    /// Get the ordered results
    pub fn results(&self) -> &[EvaluationResult] {
        &self.results
    }

    /// Results filtered by action
    pub fn results_by_action(&self, action: Action) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(move |r| r.action == action)
    }

    /// Results filtered by severity
    pub fn results_by_severity(&self, severity: Severity) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(move |r| r.severity == severity)
    }

    /// Number of results at a given severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.results_by_severity(severity).count()
    }

    /// Check if any result blocks the command
    pub fn has_blocking(&self) -> bool {
        self.results.iter().any(|r| r.action == Action::Block)
    }

    /// Check if any result warns
    pub fn has_warnings(&self) -> bool {
        self.results.iter().any(|r| r.action == Action::Warn)
    }

    /// Check if no rule produced a result
    pub fn is_clean(&self) -> bool {
        self.results.is_empty()
    }
}
