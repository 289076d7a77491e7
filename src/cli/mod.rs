//! CLI argument parsing for passchain.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Passchain: check passwords against a chain of validation steps.
///
/// Each step checks one rule (not empty, length range, required character,
/// mixed case). A password is accepted only if every step in the chain
/// accepts it; evaluation stops at the first step that rejects.
#[derive(Parser, Debug)]
#[command(name = "passchain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for passchain.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a password against the chain.
    ///
    /// Prints `accepted` and exits 0, or exits 2 naming the step that
    /// rejected the password.
    Check(CheckArgs),

    /// Show what every step decided about a password.
    ///
    /// Steps after the first rejection are reported as skipped.
    Explain(ExplainArgs),

    /// Print the configured chain, one step per line.
    Chain(ChainArgs),

    /// Write the default chain config to a file.
    Init(InitArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Password to check. If omitted, one line is read from stdin.
    pub password: Option<String>,

    /// Chain config file (defaults to ./passchain.yaml, then the built-in chain).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `explain` command.
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Password to explain. If omitted, one line is read from stdin.
    pub password: Option<String>,

    /// Chain config file (defaults to ./passchain.yaml, then the built-in chain).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `chain` command.
#[derive(Parser, Debug)]
pub struct ChainArgs {
    /// Chain config file (defaults to ./passchain.yaml, then the built-in chain).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config.
    #[arg(long, default_value = "passchain.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
