//! List command - Show every registered rule and its effective state

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::cli::exit_codes;
use crate::config::Config;
use crate::rules::{effective_definitions, Severity};

pub async fn execute(config: Config) -> Result<i32> {
    let definitions = effective_definitions(&config);

    println!("{}", "Registered rules:".bold());
    println!();

    for definition in &definitions {
        // Pad first, then color: ANSI escapes confuse width specifiers
        let id = format!("{:<26}", definition.id);
        let kind = format!("{:<16}", definition.kind.as_str());
        let severity = format!("{:<8}", definition.severity.as_str());
        let state = if definition.enabled {
            "enabled".green()
        } else {
            "disabled".dimmed()
        };

        println!(
            "  {} {} {} {}",
            id.cyan(),
            kind.dimmed(),
            colorize_severity(&severity, definition.severity),
            state
        );
    }

    println!();
    println!("{} rule(s)", definitions.len());

    Ok(exit_codes::SUCCESS)
}

fn colorize_severity(padded: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => padded.red(),
        Severity::Warning => padded.yellow(),
        Severity::Info => padded.blue(),
    }
}
