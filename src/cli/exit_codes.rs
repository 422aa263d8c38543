//! Exit codes for the CLI
//!
//! Standard exit codes used by the guardrails CLI so shell hooks and CI
//! scripts can branch on the outcome.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Evaluation completed, nothing triggered |
//! | 1 | `BLOCKING_VIOLATIONS` | Blocking violations | `git restore .` without its bypass flag |
//! | 2 | `WARNINGS` | Warnings only | `rm -rf` outside a whitelisted path |
//! | 3 | `ERROR` | Runtime error | Unreadable config file, failed fix |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Unknown rule id in `--rules` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use guardrails::cli::exit_codes;
//!
//! // Return success
//! std::process::exit(exit_codes::SUCCESS);
//!
//! // Return blocking violations
//! std::process::exit(exit_codes::BLOCKING_VIOLATIONS);
//! ```

/// Success - nothing triggered or the operation completed.
///
/// Used when:
/// - Evaluation produced no results, or ALLOW results only
/// - Every blocking result was bypassed down to a warning and none remain
/// - An apply run had nothing to fix or fixed everything it attempted
pub const SUCCESS: i32 = 0;

/// At least one violation still blocks the command.
///
/// Used when:
/// - A BLOCK result survives the bypass step
pub const BLOCKING_VIOLATIONS: i32 = 1;

/// Warnings were raised but nothing blocks.
///
/// Used when:
/// - WARN results exist and no BLOCK result remains
/// - A block was downgraded by its bypass flag
pub const WARNINGS: i32 = 2;

/// Runtime error (unreadable config, failed fix, etc.).
///
/// Used when:
/// - Configuration file cannot be read or parsed
/// - The process environment cannot be captured
/// - An apply run recorded failed fixes
pub const ERROR: i32 = 3;

/// Invalid arguments (unknown rule id, etc.).
///
/// Used when:
/// - `--rules`/`--rule` names a rule that is not registered
pub const INVALID_ARGS: i32 = 4;
