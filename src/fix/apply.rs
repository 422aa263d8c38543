//! Fix orchestration

use tracing::debug;

use super::fixer::Fixer;
use super::{FixRecord, FixSummary};
use crate::rules::EvaluationResult;

/// Run the fix flow over the violations of one evaluation.
///
/// Only violations marked fixable are attempted; the rest are recorded as
/// skipped. Every attempt is isolated: a failure is recorded and the loop
/// moves on. With `dry_run` only the pure planning path runs, so a dry run
/// selects exactly the violations a real run would.
pub async fn apply_fixes(
    violations: &[EvaluationResult],
    fixer: &dyn Fixer,
    dry_run: bool,
) -> FixSummary {
    let mut summary = FixSummary::new();

    for violation in violations {
        if !violation.fixable {
            debug!(rule = %violation.rule_id, "No mechanical rewrite, skipping");
            summary.record(FixRecord::skipped(
                &violation.rule_id,
                "no mechanical rewrite",
            ));
            continue;
        }

        let outcome = if dry_run {
            fixer
                .plan(violation)
                .map(|rewrite| format!("would rewrite to '{rewrite}'"))
        } else {
            fixer
                .apply(violation)
                .await
                .map(|rewrite| format!("rewrote to '{rewrite}'"))
        };

        match outcome {
            Ok(detail) => summary.record(FixRecord::applied(&violation.rule_id, detail)),
            Err(e) => summary.record(FixRecord::failed(&violation.rule_id, e.to_string())),
        }
    }

    summary
}
