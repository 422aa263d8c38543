//! Init command - write the starter configuration file

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::cli::exit_codes;
use crate::config::{Config, CONFIG_FILENAME};
use crate::error::ConfigError;

/// Commented template appended below the serialized defaults so the file
/// documents how to declare project rules.
const CUSTOM_RULE_EXAMPLE: &str = r#"
# Declare additional rules as [[custom]] tables:
#
# [[custom]]
# id = "no-curl-pipe-sh"
# kind = "command-pattern"
# pattern = 'curl[^|]*\|\s*(ba)?sh'
# severity = "error"
# message = "Piping curl straight into a shell is blocked"
# require_explicit = true
"#;

pub async fn execute(args: InitArgs) -> Result<i32> {
    let config_path = Path::new(CONFIG_FILENAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        if args.non_interactive {
            eprintln!(
                "{} Configuration file already exists. Use --force to overwrite.",
                "Error:".red().bold()
            );
            return Ok(exit_codes::ERROR);
        }

        let overwrite = Confirm::new()
            .with_prompt("Configuration file already exists. Overwrite?")
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(exit_codes::SUCCESS);
        }
    }

    let config = Config::starter();

    let mut content = config.to_toml()?;
    content.push_str(CUSTOM_RULE_EXAMPLE);

    fs::write(config_path, &content).map_err(|e| ConfigError::FileWrite {
        path: config_path.display().to_string(),
        source: e,
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", CONFIG_FILENAME.cyan());
    println!(
        "  2. Run {} to evaluate a command",
        "guardrails check \"rm -rf ./build\"".cyan()
    );
    println!(
        "  3. Run {} to check the project state",
        "guardrails audit".cyan()
    );

    Ok(exit_codes::SUCCESS)
}
