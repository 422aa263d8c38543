//! Configuration module

pub mod loader;

pub use loader::{Config, CONFIG_FILENAME};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::Severity;

/// Per-rule override declared under `[rules.<id>]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOverride {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity override (error, warning, info)
    pub severity: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for RuleOverride {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }
}

impl RuleOverride {
    /// Parse the severity override, rejecting unknown spellings.
    pub fn severity_override(&self) -> Result<Option<Severity>, ConfigError> {
        match self.severity.as_deref() {
            None => Ok(None),
            Some(value) => Severity::from_string(value)
                .map(Some)
                .ok_or_else(|| ConfigError::UnknownSeverity(value.to_string())),
        }
    }
}
