//! Rules module - Guardrail rules and the evaluation engine

pub mod builtin;
pub mod compiled;
pub mod definition;
pub mod engine;
pub mod registry;
pub mod results;

pub use compiled::CompiledRule;
pub use definition::{RuleDefinition, RuleKind};
pub use engine::{Rule, RulesEngine};
pub use registry::{effective_definitions, RuleRegistry};
pub use results::{Action, EvaluationReport, EvaluationResult, Severity};
