//! # CLI Module
//!
//! This module defines the command-line interface for Guardrails using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `init` | Initialize a new configuration file |
//! | `check` | Evaluate a command line against the guardrail rules |
//! | `audit` | Evaluate the current project state (directory, environment) |
//! | `apply` | Rewrite flagged commands to their safer equivalents |
//! | `list` | Show every registered rule and its effective state |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report output formatters (Terminal, JSON)
//!
//! ## Global Options
//!
//! All commands support these global options:
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Initialize configuration
//! guardrails init
//!
//! # Check a command before running it
//! guardrails check "rm -rf ./build"
//!
//! # Audit the project state as JSON
//! guardrails audit --format json
//!
//! # Rewrite a flagged command without prompting
//! guardrails apply "cat src/main.rs" --yes
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{ApplyArgs, AuditArgs, CheckArgs, InitArgs};

/// Guardrails - Check shell commands against safety rules before they run
#[derive(Parser, Debug)]
#[command(name = "guardrails")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(InitArgs),

    /// Evaluate a command line against the guardrail rules
    Check(CheckArgs),

    /// Evaluate the current project state (directory, environment)
    Audit(AuditArgs),

    /// Rewrite flagged commands to their safer equivalents
    Apply(ApplyArgs),

    /// Show every registered rule and its effective state
    List,
}
