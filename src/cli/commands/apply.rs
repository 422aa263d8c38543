//! Apply command - Rewrite flagged commands to their safer equivalents

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{command_context, honor_bypass_flags, unknown_rule_ids, ApplyArgs};
use crate::cli::exit_codes;
use crate::config::Config;
use crate::fix::{apply_fixes, FixStatus, FixSummary, Fixer, RewriteFixer};
use crate::rules::{RuleRegistry, RulesEngine};

pub async fn execute(args: ApplyArgs, config: Config) -> Result<i32> {
    let registry = RuleRegistry::from_config(&config);

    if let Some(ids) = &args.rule {
        let unknown = unknown_rule_ids(&registry, ids);
        if !unknown.is_empty() {
            eprintln!(
                "{} unknown rule id(s): {}",
                "Error:".red().bold(),
                unknown.join(", ")
            );
            return Ok(exit_codes::INVALID_ARGS);
        }
    }

    let engine = RulesEngine::new(registry);
    let context = command_context(&args.command)?;
    let mut results = engine.evaluate(&context).await;
    honor_bypass_flags(&mut results, &context);

    // Every triggered rule is a rewrite candidate, narrowed to the
    // requested rules if any
    let violations: Vec<_> = results
        .into_iter()
        .filter(|result| {
            args.rule
                .as_ref()
                .map_or(true, |ids| ids.iter().any(|id| id == &result.rule_id))
        })
        .collect();

    if violations.is_empty() {
        println!("{}", "Nothing to fix.".green());
        return Ok(exit_codes::SUCCESS);
    }

    // Preview what each violation would be rewritten to
    let fixer = RewriteFixer::new();
    println!("{}", "Planned rewrites:".bold());
    println!();
    let mut fixable = 0;
    for violation in &violations {
        match fixer.plan(violation) {
            Ok(rewrite) => {
                println!(
                    "  {} [{}] {}",
                    "+".green(),
                    violation.rule_id.cyan(),
                    rewrite
                );
                fixable += 1;
            }
            Err(_) => {
                println!(
                    "  {} [{}] {}",
                    "-".dimmed(),
                    violation.rule_id.cyan(),
                    "no mechanical rewrite".dimmed()
                );
            }
        }
    }
    println!();

    if fixable == 0 {
        println!("{}", "No fixable violations.".yellow());
        return Ok(exit_codes::SUCCESS);
    }

    // Dry run mode
    if args.dry_run {
        let summary = apply_fixes(&violations, &fixer, true).await;
        print_summary(&summary);
        println!("{}", "Dry run mode - no changes made.".yellow());
        return Ok(exit_codes::SUCCESS);
    }

    // Confirm execution
    if !args.yes {
        let confirm = Confirm::new()
            .with_prompt("Apply these rewrites?")
            .default(false)
            .interact()?;

        if !confirm {
            println!("{}", "Aborted.".yellow());
            return Ok(exit_codes::SUCCESS);
        }
    }

    let summary = apply_fixes(&violations, &fixer, false).await;
    print_summary(&summary);

    if summary.failed > 0 {
        Ok(exit_codes::ERROR)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

fn print_summary(summary: &FixSummary) {
    println!();
    for record in summary.records() {
        match record.status {
            FixStatus::Applied => {
                println!(
                    "  {} [{}] {}",
                    "✓".green(),
                    record.rule_id.cyan(),
                    record.detail
                );
            }
            FixStatus::Skipped => {
                println!(
                    "  {} [{}] {}",
                    "-".dimmed(),
                    record.rule_id.cyan(),
                    record.detail.dimmed()
                );
            }
            FixStatus::Failed => {
                println!(
                    "  {} [{}] {}",
                    "✗".red(),
                    record.rule_id.cyan(),
                    record.detail
                );
            }
        }
    }
    println!();
    println!(
        "{}: {} applied, {} skipped, {} failed",
        "Summary".bold(),
        summary.applied.to_string().green(),
        summary.skipped,
        summary.failed.to_string().red()
    );
}
