//! # Rule Definitions
//!
//! A [`RuleDefinition`] is the immutable descriptor a rule is built from:
//! what to match, how severe a match is, and how the violation is presented.
//! Definitions come from the built-in set ([`crate::rules::builtin`]) or from
//! `[[custom]]` tables in the configuration file — both deserialize into the
//! same shape and are treated identically from registration onward.
//!
//! ## Examples
//!
//! ```rust
//! use guardrails::rules::{RuleDefinition, RuleKind, Severity};
//!
//! let rule = RuleDefinition::new(
//!     "safe-rm-intercept",
//!     RuleKind::CommandPattern,
//!     Severity::Warning,
//!     "Detected 'rm' command. Consider using 'trash' for safer deletion.",
//! )
//! .with_pattern(r"^rm\s+-rf?")
//! .with_suggestion("trash {{args}}")
//! .with_whitelist(["/tmp", "/var/tmp"]);
//!
//! assert!(rule.enabled);
//! ```

use serde::{Deserialize, Serialize};

use super::results::Severity;

/// The kind of check a rule performs, which decides the context field the
/// pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Match the pattern against the invoked command line.
    CommandPattern,
    /// Like [`RuleKind::CommandPattern`], but the result is always an ALLOW
    /// carrying a suggestion: a nudge toward a preferred tool, never a gate.
    ToolPreference,
    /// Match the pattern against the working directory path.
    FileCheck,
    /// Match the pattern against `NAME=value` environment entries.
    EnvCheck,
}

impl RuleKind {
    /// Human-readable kind name as used in config files and `list` output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommandPattern => "command-pattern",
            Self::ToolPreference => "tool-preference",
            Self::FileCheck => "file-check",
            Self::EnvCheck => "env-check",
        }
    }
}

/// Immutable descriptor of a single guardrail rule.
///
/// Definitions deserialize directly from `[[custom]]` config tables; every
/// field except `id`, `kind` and `message` has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique rule identifier (e.g. "safe-rm-intercept").
    pub id: String,

    /// What the rule inspects.
    pub kind: RuleKind,

    /// Regex source matched case-insensitively against the kind's subject.
    pub pattern: Option<String>,

    /// Severity of a violation; also drives result ordering.
    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Disabled rules never produce a result.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Short message describing the violation.
    pub message: String,

    /// Optional remediation. A `{{args}}` placeholder is replaced with the
    /// context's argument tokens joined by single spaces.
    pub suggestion: Option<String>,

    /// Substrings exempting an otherwise-matching invocation.
    #[serde(default)]
    pub whitelist: Vec<String>,

    /// If true, the violation can only be bypassed by a named flag.
    #[serde(default)]
    pub require_explicit: bool,

    /// Override token honored when `require_explicit` is set. Defaults to
    /// `--force-<rule-id>` when absent.
    pub bypass_flag: Option<String>,
}

fn default_severity() -> Severity {
    Severity::Warning
}

fn default_true() -> bool {
    true
}

impl RuleDefinition {
    /// Create a new definition with empty optional fields.
    pub fn new(
        id: impl Into<String>,
        kind: RuleKind,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            pattern: None,
            severity,
            enabled: true,
            message: message.into(),
            suggestion: None,
            whitelist: Vec::new(),
            require_explicit: false,
            bypass_flag: None,
        }
    }

    /// Set the pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the suggestion template.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the whitelist entries.
    pub fn with_whitelist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Require an explicit bypass flag to override a block.
    pub fn require_explicit(mut self) -> Self {
        self.require_explicit = true;
        self
    }

    /// Declare a rule-specific bypass flag token.
    pub fn with_bypass_flag(mut self, flag: impl Into<String>) -> Self {
        self.bypass_flag = Some(flag.into());
        self
    }

    /// Mark the rule as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The bypass token callers must supply when `require_explicit` is set.
    pub fn bypass_token(&self) -> Option<String> {
        if !self.require_explicit {
            return None;
        }
        Some(
            self.bypass_flag
                .clone()
                .unwrap_or_else(|| format!("--force-{}", self.id)),
        )
    }
}
