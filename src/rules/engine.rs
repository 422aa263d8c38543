//! Rules evaluation engine

use tracing::{debug, info};

use super::registry::RuleRegistry;
use super::results::EvaluationResult;
use crate::context::RuleContext;
use crate::error::GuardrailsError;

/// Trait for guardrail rules
///
/// A rule inspects one evaluation context and either stays silent or emits a
/// single result. Predicates may suspend (a rule kind could probe a tool's
/// presence), so the engine awaits each one before moving to the next.
#[async_trait::async_trait]
pub trait Rule: Send + Sync {
    /// Get the rule id
    fn id(&self) -> &str;

    /// Whether the rule participates in evaluation
    fn enabled(&self) -> bool {
        true
    }

    /// Test the context and optionally emit a result
    async fn evaluate(
        &self,
        context: &RuleContext,
    ) -> Result<Option<EvaluationResult>, GuardrailsError>;
}

/// Main rules evaluation engine
pub struct RulesEngine {
    registry: RuleRegistry,
    only_rules: Option<Vec<String>>,
}

impl RulesEngine {
    /// Create a new engine over a built registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            only_rules: None,
        }
    }

    /// Restrict evaluation to an explicit id allow-list
    pub fn set_only_rules(&mut self, ids: Vec<String>) {
        self.only_rules = Some(ids);
    }

    /// Number of rules the next evaluation will run
    pub fn rules_evaluated(&self) -> usize {
        self.registry.enabled_rules(self.only_rules.as_deref()).len()
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run every enabled rule against the context and return the ordered results.
    ///
    /// Rules run sequentially in registration order; each predicate is awaited
    /// before the next starts. Results are stable-sorted by severity, most
    /// severe first, so ties keep registration order. A failing predicate is
    /// logged and skipped; it never aborts the rest of the evaluation.
    pub async fn evaluate(&self, context: &RuleContext) -> Vec<EvaluationResult> {
        let mut results = Vec::new();

        for rule in self.registry.enabled_rules(self.only_rules.as_deref()) {
            debug!(rule = rule.id(), "Evaluating rule");

            match rule.evaluate(context).await {
                Ok(Some(result)) => {
                    debug!(
                        rule = rule.id(),
                        action = result.action.label(),
                        "Rule matched"
                    );
                    results.push(result);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        rule = rule.id(),
                        error = %e,
                        "Error evaluating rule"
                    );
                }
            }
        }

        results.sort_by_key(|r| r.severity);

        info!(
            "Evaluation complete: {} result(s) from {} rule(s)",
            results.len(),
            self.rules_evaluated(),
        );

        results
    }
}
