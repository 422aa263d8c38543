//! Evaluation context
//!
//! A [`RuleContext`] is the immutable snapshot handed to every rule for one
//! evaluation: the command line being checked (if any), its argument tokens,
//! the environment, and the working directory. The host CLI assembles it from
//! `argv`, the process environment, and the current directory; rules only
//! read it.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::GuardrailsError;

/// Input snapshot for one evaluation.
///
/// # Examples
///
/// ```rust
/// use guardrails::context::RuleContext;
///
/// let context = RuleContext::for_command("rm -rf ./build", vec!["-rf".into(), "./build".into()]);
/// assert_eq!(context.command.as_deref(), Some("rm -rf ./build"));
/// ```
#[derive(Debug, Clone)]
pub struct RuleContext {
    /// Raw invoked command line, absent for project-state evaluations.
    pub command: Option<String>,

    /// Ordered argument tokens (everything after the program name).
    pub args: Vec<String>,

    /// Environment variables visible to the invocation.
    pub env: HashMap<String, String>,

    /// Working directory of the invocation.
    pub cwd: PathBuf,
}

impl RuleContext {
    /// Context for evaluating a single command invocation.
    pub fn for_command(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: Some(command.into()),
            args,
            env: HashMap::new(),
            cwd: PathBuf::from("."),
        }
    }

    /// Context for evaluating project state without a command.
    pub fn for_project() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            env: HashMap::new(),
            cwd: PathBuf::from("."),
        }
    }

    /// Snapshot the calling process environment and working directory.
    pub fn capture_process(mut self) -> Result<Self, GuardrailsError> {
        self.env = std::env::vars().collect();
        self.cwd = std::env::current_dir()?;
        Ok(self)
    }

    /// Set a single environment variable.
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Set the working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }
}
