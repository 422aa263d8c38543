//! Guardrails - A CLI tool to check shell commands and project state against safety rules
//!
//! This is the main entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use guardrails::cli::{commands, exit_codes, Cli, Commands};
use guardrails::config::Config;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Surface exit codes for shell integration
    match run(cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init(args) => commands::init::execute(args).await,
        Commands::Check(args) => commands::check::execute(args, load_config(config_path)?).await,
        Commands::Audit(args) => commands::audit::execute(args, load_config(config_path)?).await,
        Commands::Apply(args) => commands::apply::execute(args, load_config(config_path)?).await,
        Commands::List => commands::list::execute(load_config(config_path)?).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
