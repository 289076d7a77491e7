//! Error types for passchain.
//!
//! The validation chain itself never fails: a rejected candidate is a plain
//! `false`. These errors only cover the outer surfaces (config loading and the
//! CLI), where a rejection is reported through its own exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for passchain operations.
#[derive(Error, Debug)]
pub enum PasschainError {
    /// User provided invalid arguments or input could not be read.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or failed validation.
    #[error("Invalid config: {0}")]
    ConfigError(String),

    /// The candidate failed one of the chain's steps.
    #[error("Password rejected: {0}")]
    Rejected(String),
}

impl PasschainError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PasschainError::UserError(_) => exit_codes::USER_ERROR,
            PasschainError::ConfigError(_) => exit_codes::USER_ERROR,
            PasschainError::Rejected(_) => exit_codes::REJECTED,
        }
    }
}

/// Result type alias for passchain operations.
pub type Result<T> = std::result::Result<T, PasschainError>;
