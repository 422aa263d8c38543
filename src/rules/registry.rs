//! Rule registry
//!
//! Ordered collection of rules: registration order is evaluation order, and
//! the registry is read-only once built. [`RuleRegistry::from_config`]
//! assembles the working set from the built-in definitions plus the
//! configuration's overrides and `[[custom]]` declarations.

use tracing::warn;

use super::builtin;
use super::compiled::CompiledRule;
use super::definition::RuleDefinition;
use super::engine::Rule;
use crate::config::Config;
use crate::error::{GuardrailsError, RuleError};

/// Built-in definitions with config overrides applied, followed by the
/// config-declared custom rules. This is the registration order.
pub fn effective_definitions(config: &Config) -> Vec<RuleDefinition> {
    builtin::builtin_definitions()
        .into_iter()
        .chain(config.custom.iter().cloned())
        .map(|definition| config.apply_override(definition))
        .collect()
}

/// Ordered collection of registered rules.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a registry from the built-in set and the configuration.
    ///
    /// A definition that fails to compile, or that collides with an already
    /// registered id, is reported and left out; the remaining rules are
    /// unaffected.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();

        for definition in effective_definitions(config) {
            let id = definition.id.clone();
            match CompiledRule::new(definition) {
                Ok(rule) => {
                    if let Err(e) = registry.register(Box::new(rule)) {
                        warn!(rule = %id, error = %e, "Skipping rule");
                    }
                }
                Err(e) => {
                    warn!(rule = %id, error = %e, "Skipping rule with invalid definition");
                }
            }
        }

        registry
    }

    /// Append a rule. Ids must be unique within the registry.
    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<(), GuardrailsError> {
        if self.by_id(rule.id()).is_some() {
            return Err(RuleError::DuplicateId(rule.id().to_string()).into());
        }
        self.rules.push(rule);
        Ok(())
    }

    /// The enabled rules in registration order, optionally intersected with
    /// an explicit id allow-list.
    pub fn enabled_rules(&self, filter: Option<&[String]>) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| rule.enabled())
            .filter(|rule| filter.map_or(true, |ids| ids.iter().any(|id| id == rule.id())))
            .collect()
    }

    /// Look up a rule by id
    pub fn by_id(&self, id: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .find(|rule| rule.id() == id)
    }

    /// Iterate over all registered rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
