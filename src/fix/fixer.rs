//! Fixer collaborator
//!
//! [`Fixer`] separates deciding a fix (`plan`, pure) from carrying it out
//! (`apply`, effectful). The shipped [`RewriteFixer`] resolves a violation to
//! its rewritten command and treats a missing replacement tool as a
//! per-item failure; integrators that mutate shell config hook in here.

use async_trait::async_trait;

use crate::error::{FixError, GuardrailsError};
use crate::rules::EvaluationResult;

/// Decides and applies fixes for individual violations.
#[async_trait]
pub trait Fixer: Send + Sync {
    /// Resolve the rewritten command for a violation without side effects.
    fn plan(&self, violation: &EvaluationResult) -> Result<String, GuardrailsError>;

    /// Carry out the fix. May probe or mutate the system.
    async fn apply(&self, violation: &EvaluationResult) -> Result<String, GuardrailsError>;
}

/// Fixer that rewrites a command to the violation's substituted suggestion.
#[derive(Debug, Default)]
pub struct RewriteFixer;

impl RewriteFixer {
    /// Create a new rewrite fixer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Fixer for RewriteFixer {
    fn plan(&self, violation: &EvaluationResult) -> Result<String, GuardrailsError> {
        if !violation.fixable {
            return Err(FixError::NoRewrite(violation.rule_id.clone()).into());
        }

        violation
            .suggestion
            .clone()
            .ok_or_else(|| FixError::NoRewrite(violation.rule_id.clone()).into())
    }

    async fn apply(&self, violation: &EvaluationResult) -> Result<String, GuardrailsError> {
        let rewrite = self.plan(violation)?;

        // The rewrite is only usable when its target tool is installed.
        let tool = rewrite
            .split_whitespace()
            .next()
            .ok_or_else(|| FixError::NoRewrite(violation.rule_id.clone()))?;

        which::which(tool).map_err(|_| FixError::ToolNotFound {
            tool: tool.to_string(),
        })?;

        Ok(rewrite)
    }
}
