//! Implementation of the `passchain init` command.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{PasschainError, Result};
use std::path::Path;
use tracing::info;

/// Execute the `passchain init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    write_default_config(&args.path, args.force)?;
    println!("Wrote default chain config to {}", args.path.display());
    Ok(())
}

/// Write `Config::default()` as YAML to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PasschainError::UserError(format!(
            "'{}' already exists.\n\nUse --force to overwrite it.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(path, yaml).map_err(|e| {
        PasschainError::UserError(format!(
            "failed to write config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
