//! Fix flow - mechanical rewrites for violations
//!
//! Violations whose suggestion is a ready-to-run rewrite can be handed to
//! [`apply_fixes`], which plans or applies each one in isolation through a
//! [`Fixer`]. Dry runs exercise the same selection logic as real runs
//! without touching the system.

pub mod apply;
pub mod fixer;

pub use apply::apply_fixes;
pub use fixer::{Fixer, RewriteFixer};

/// Outcome of one fix attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    /// The rewrite was applied, or would be in a dry run
    Applied,
    /// The violation carries no mechanical rewrite
    Skipped,
    /// The fix attempt failed
    Failed,
}

/// Per-violation detail of a fix run
#[derive(Debug, Clone)]
pub struct FixRecord {
    /// Id of the rule whose violation was attempted
    pub rule_id: String,

    /// What happened to the attempt
    pub status: FixStatus,

    /// The rewrite, the skip reason or the error message
    pub detail: String,
}

impl FixRecord {
    /// Record a successful (or simulated) rewrite
    pub fn applied(rule_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            status: FixStatus::Applied,
            detail: detail.into(),
        }
    }

    /// Record a violation the fix flow did not attempt
    pub fn skipped(rule_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            status: FixStatus::Skipped,
            detail: detail.into(),
        }
    }

    /// Record a failed attempt
    pub fn failed(rule_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            status: FixStatus::Failed,
            detail: detail.into(),
        }
    }
}

/// Aggregated counts plus per-item details for one fix run
#[derive(Debug, Default)]
pub struct FixSummary {
    /// Number of applied (or simulated) rewrites
    pub applied: usize,

    /// Number of violations skipped as not fixable
    pub skipped: usize,

    /// Number of failed attempts
    pub failed: usize,

    records: Vec<FixRecord>,
}

impl FixSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and bump the matching counter
    pub fn record(&mut self, record: FixRecord) {
        match record.status {
            FixStatus::Applied => self.applied += 1,
            FixStatus::Skipped => self.skipped += 1,
            FixStatus::Failed => self.failed += 1,
        }
        self.records.push(record);
    }

    /// The per-violation records in attempt order
    pub fn records(&self) -> &[FixRecord] {
        &self.records
    }
}
