//! Configuration model for passchain.
//!
//! This module defines the Config struct that represents `passchain.yaml`: the
//! ordered list of steps a chain is assembled from. It supports
//! forward-compatible YAML parsing (unknown top-level fields are ignored),
//! defaults for optional step parameters, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::StepConfig;
