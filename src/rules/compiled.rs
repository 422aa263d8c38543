//! Definition-bound rule predicates
//!
//! [`CompiledRule`] binds a [`RuleDefinition`] to its compiled pattern and
//! implements the [`Rule`] predicate for all four rule kinds. Compilation
//! happens once at registration; a malformed or missing pattern surfaces
//! there, never during evaluation.

use regex::{Regex, RegexBuilder};

use super::definition::{RuleDefinition, RuleKind};
use super::engine::Rule;
use super::results::{Action, EvaluationResult};
use crate::context::RuleContext;
use crate::error::{GuardrailsError, RuleError};

/// A rule definition bound to its compiled case-insensitive pattern.
#[derive(Debug)]
pub struct CompiledRule {
    definition: RuleDefinition,
    matcher: Regex,
}

impl CompiledRule {
    /// Compile a definition into an evaluable rule.
    ///
    /// Fails when the definition has no pattern or the pattern does not
    /// compile; the caller decides whether that skips the rule or aborts.
    pub fn new(definition: RuleDefinition) -> Result<Self, GuardrailsError> {
        let source = definition
            .pattern
            .as_deref()
            .ok_or_else(|| RuleError::MissingPattern(definition.id.clone()))?;

        let matcher = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidPattern {
                id: definition.id.clone(),
                source: e,
            })?;

        Ok(Self {
            definition,
            matcher,
        })
    }

    /// Access the underlying definition.
    pub fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    /// Match the pattern against the kind's subject, returning the matched
    /// subject string. `None` means the context lacks the subject or the
    /// pattern did not match — the rule fails closed either way.
    fn matched_subject(&self, context: &RuleContext) -> Option<String> {
        match self.definition.kind {
            RuleKind::CommandPattern | RuleKind::ToolPreference => {
                let command = context.command.as_deref()?;
                self.matcher.is_match(command).then(|| command.to_string())
            }
            RuleKind::FileCheck => {
                let cwd = context.cwd.to_str()?;
                self.matcher.is_match(cwd).then(|| cwd.to_string())
            }
            RuleKind::EnvCheck => {
                // Sorted so evaluation stays deterministic across map orders.
                let mut entries: Vec<String> = context
                    .env
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect();
                entries.sort();
                entries.into_iter().find(|entry| self.matcher.is_match(entry))
            }
        }
    }

    /// Whitelist entries exempt a match when they appear in the command, any
    /// argument token, or the matched subject itself.
    fn whitelisted(&self, subject: &str, context: &RuleContext) -> bool {
        self.definition.whitelist.iter().any(|entry| {
            subject.contains(entry.as_str())
                || context
                    .command
                    .as_deref()
                    .is_some_and(|command| command.contains(entry.as_str()))
                || context.args.iter().any(|arg| arg.contains(entry.as_str()))
        })
    }

    fn substituted_suggestion(&self, context: &RuleContext) -> Option<String> {
        let template = self.definition.suggestion.as_deref()?;
        Some(template.replace("{{args}}", &context.args.join(" ")))
    }

    /// Tool-preference results are advisory by definition; every other kind
    /// maps severity to its default action.
    fn action(&self) -> Action {
        match self.definition.kind {
            RuleKind::ToolPreference => Action::Allow,
            _ => Action::from_severity(self.definition.severity),
        }
    }

    /// A suggestion with an `{{args}}` placeholder is a mechanical command
    /// rewrite the fix flow can attempt; prose suggestions are not.
    fn is_fixable(&self) -> bool {
        self.definition
            .suggestion
            .as_deref()
            .is_some_and(|s| s.contains("{{args}}"))
    }
}

#[async_trait::async_trait]
impl Rule for CompiledRule {
    fn id(&self) -> &str {
        &self.definition.id
    }

    fn enabled(&self) -> bool {
        self.definition.enabled
    }

    async fn evaluate(
        &self,
        context: &RuleContext,
    ) -> Result<Option<EvaluationResult>, GuardrailsError> {
        let subject = match self.matched_subject(context) {
            Some(subject) => subject,
            None => return Ok(None),
        };

        if self.whitelisted(&subject, context) {
            return Ok(None);
        }

        let mut result = EvaluationResult::new(
            self.definition.id.as_str(),
            self.action(),
            self.definition.severity,
            self.definition.message.as_str(),
        );

        if let Some(suggestion) = self.substituted_suggestion(context) {
            result = result.with_suggestion(suggestion);
        }
        if let Some(flag) = self.definition.bypass_token() {
            result = result.with_bypass_flag(flag);
        }
        if self.is_fixable() {
            result = result.fixable();
        }

        Ok(Some(result))
    }
}
