//! Audit command - evaluate project state without a command

use anyhow::{Context, Result};
use std::fs;

use super::{exit_code_for, render, AuditArgs};
use crate::cli::output::{JsonOutput, OutputRenderer};
use crate::config::Config;
use crate::context::RuleContext;
use crate::rules::{EvaluationReport, RuleRegistry, RulesEngine};

pub async fn execute(args: AuditArgs, config: Config) -> Result<i32> {
    let registry = RuleRegistry::from_config(&config);
    let engine = RulesEngine::new(registry);

    // No command in the context, so command rules return nothing and only
    // the project-state guards can trigger.
    let context = RuleContext::for_project().capture_process()?;
    let results = engine.evaluate(&context).await;
    let report = EvaluationReport::new(&context, engine.rules_evaluated(), results);

    if let Some(path) = &args.output {
        let rendered = JsonOutput::new().render(&report)?;
        fs::write(path, rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        eprintln!("Report written to: {}", path.display());
    } else {
        println!("{}", render(&report, &args.format)?);
    }

    Ok(exit_code_for(&report))
}
