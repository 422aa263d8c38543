//! Error types for guardrails
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for guardrails
#[derive(Error, Debug)]
pub enum GuardrailsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule registration and evaluation errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Fix application errors
    #[error("Fix error: {0}")]
    Fix(#[from] FixError),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors outside of a more specific context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a configuration file
    #[error("Failed to write config file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file contains invalid TOML
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized to TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Severity override is not one of error, warning, info
    #[error("Unknown severity '{0}' (expected error, warning or info)")]
    UnknownSeverity(String),
}

/// Errors surfaced at rule registration time
#[derive(Error, Debug)]
pub enum RuleError {
    /// Two rules were registered under the same id
    #[error("Duplicate rule id '{0}'")]
    DuplicateId(String),

    /// A rule pattern failed to compile
    #[error("Invalid pattern for rule '{id}': {source}")]
    InvalidPattern {
        /// Id of the rule carrying the bad pattern
        id: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// A pattern-driven rule was declared without a pattern
    #[error("Rule '{0}' has no pattern")]
    MissingPattern(String),
}

/// Errors raised while applying a fix
#[derive(Error, Debug)]
pub enum FixError {
    /// The violation carries no mechanical rewrite
    #[error("No rewrite available for rule '{0}'")]
    NoRewrite(String),

    /// The rewritten command's tool is not installed
    #[error("Replacement tool '{tool}' not found on PATH")]
    ToolNotFound {
        /// Name of the missing executable
        tool: String,
    },
}
