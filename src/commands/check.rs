//! Implementation of the `passchain check` command.

use super::{load_chain, read_candidate};
use crate::chain::Chain;
use crate::cli::CheckArgs;
use crate::error::{PasschainError, Result};

/// Execute the `passchain check` command.
///
/// # Exit Codes
///
/// - 0: Password accepted
/// - 1: User error (unreadable input, invalid config)
/// - 2: Password rejected
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let chain = load_chain(args.config.as_deref())?;
    let candidate = read_candidate(args.password)?;

    check_candidate(&chain, &candidate)?;

    println!("accepted");
    Ok(())
}

/// Run the chain and turn a rejection into an error naming the failing step.
fn check_candidate(chain: &Chain, candidate: &str) -> Result<()> {
    if chain.validate(candidate) {
        return Ok(());
    }

    let report = chain.evaluate(candidate);
    Err(PasschainError::Rejected(report.rejection_summary()))
}
