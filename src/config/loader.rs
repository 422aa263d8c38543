//! Configuration loader
//!
//! Discovery precedence: an explicit `--config` path, then `.guardrails.toml`
//! in the working directory, then the user-level file under the platform
//! config directory. No file at all yields the built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ConfigError, GuardrailsError};
use crate::rules::RuleDefinition;

use super::RuleOverride;

/// Project-level configuration filename
pub const CONFIG_FILENAME: &str = ".guardrails.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Rule overrides keyed by rule id
    #[serde(default)]
    pub rules: HashMap<String, RuleOverride>,

    /// Config-declared rule definitions, appended after the built-ins.
    /// Skipped when empty so `custom = []` never clashes with a later
    /// `[[custom]]` table in the same file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<RuleDefinition>,
}

impl Config {
    /// Load configuration following the discovery precedence.
    ///
    /// An explicit path must exist; the fallback locations are skipped
    /// silently when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GuardrailsError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading configuration from explicit path");
            return Self::load_from_file(path);
        }

        let project_path = Path::new(CONFIG_FILENAME);
        if project_path.exists() {
            debug!("Loading project configuration");
            return Self::load_from_file(project_path);
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                debug!(path = %user_path.display(), "Loading user configuration");
                return Self::load_from_file(&user_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from the discovery chain or return default
    pub fn load_or_default() -> Result<Self, GuardrailsError> {
        Self::load(None)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, GuardrailsError> {
        let content = fs::read_to_string(path).map_err(|e| {
            GuardrailsError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        let config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// User-level fallback at `<config-dir>/guardrails/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("guardrails").join("config.toml"))
    }

    /// Starter configuration written by `init`: one override stub per
    /// built-in rule so the file documents what can be tuned.
    pub fn starter() -> Self {
        let mut config = Self::default();
        for definition in crate::rules::builtin::builtin_definitions() {
            config.rules.insert(definition.id, RuleOverride::default());
        }
        config
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, GuardrailsError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        Ok(content)
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).map(|r| r.enabled).unwrap_or(true)
    }

    /// Apply the `[rules.<id>]` override to a definition.
    ///
    /// An unknown severity spelling is reported and ignored; it never takes
    /// the whole rule down.
    pub fn apply_override(&self, mut definition: RuleDefinition) -> RuleDefinition {
        let Some(override_) = self.rules.get(&definition.id) else {
            return definition;
        };

        definition.enabled = override_.enabled;
        match override_.severity_override() {
            Ok(Some(severity)) => definition.severity = severity,
            Ok(None) => {}
            Err(e) => {
                warn!(rule = %definition.id, error = %e, "Ignoring severity override");
            }
        }

        definition
    }
}
