//! Command implementations for passchain.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share for loading the chain and
//! reading the candidate password.

mod check;
mod explain;
mod init;
mod show_chain;

use crate::chain::Chain;
use crate::cli::Command;
use crate::config::Config;
use crate::error::{PasschainError, Result};
use std::io::BufRead;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Explain(args) => explain::cmd_explain(args),
        Command::Chain(args) => show_chain::cmd_chain(args),
        Command::Init(args) => init::cmd_init(args),
    }
}

/// Resolve the config relative to the working directory and build its chain.
fn load_chain(config: Option<&Path>) -> Result<Chain> {
    let cwd = std::env::current_dir().map_err(|e| {
        PasschainError::UserError(format!("failed to determine current directory: {}", e))
    })?;

    Config::resolve(config, &cwd)?.build_chain()
}

/// Use the password from the command line, or read one line from stdin.
fn read_candidate(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => read_candidate_from(std::io::stdin().lock()),
    }
}

/// Read a single line, dropping the trailing line ending.
fn read_candidate_from<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| {
        PasschainError::UserError(format!("failed to read password from stdin: {}", e))
    })?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
