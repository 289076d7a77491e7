//! Implementation of the `passchain explain` command.

use super::{load_chain, read_candidate};
use crate::chain::ChainReport;
use crate::cli::ExplainArgs;
use crate::error::{PasschainError, Result};

/// Execute the `passchain explain` command.
///
/// Prints the per-step report, then exits like `check`.
pub fn cmd_explain(args: ExplainArgs) -> Result<()> {
    let chain = load_chain(args.config.as_deref())?;
    let candidate = read_candidate(args.password)?;

    let report = chain.evaluate(&candidate);
    print!("{}", render_report(&report, args.json)?);

    if report.is_success() {
        Ok(())
    } else {
        Err(PasschainError::Rejected(report.rejection_summary()))
    }
}

fn render_report(report: &ChainReport, json: bool) -> Result<String> {
    if !json {
        return Ok(report.format_text());
    }

    let mut out = serde_json::to_string_pretty(report).map_err(|e| {
        PasschainError::UserError(format!("failed to serialize report to JSON: {}", e))
    })?;
    out.push('\n');
    Ok(out)
}
