//! Exit code constants for the passchain CLI.
//!
//! - 0: Success (candidate accepted, command completed)
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Candidate rejected by the validation chain

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// The candidate password was rejected by one of the chain's steps.
pub const REJECTED: i32 = 2;
