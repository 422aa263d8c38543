//! Check command - evaluate one command against the guardrail rules

use anyhow::Result;
use colored::Colorize;

use super::{command_context, exit_code_for, honor_bypass_flags, render, unknown_rule_ids, CheckArgs};
use crate::cli::exit_codes;
use crate::config::Config;
use crate::rules::{EvaluationReport, RuleRegistry, RulesEngine};

pub async fn execute(args: CheckArgs, config: Config) -> Result<i32> {
    let registry = RuleRegistry::from_config(&config);

    if let Some(ids) = &args.rules {
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

    let mut engine = RulesEngine::new(registry);
    if let Some(ids) = args.rules.clone() {
        engine.set_only_rules(ids);
    }

    let context = command_context(&args.command)?;
    let mut results = engine.evaluate(&context).await;
    honor_bypass_flags(&mut results, &context);

    let report = EvaluationReport::new(&context, engine.rules_evaluated(), results);
    println!("{}", render(&report, &args.format)?);

    Ok(exit_code_for(&report))
}
