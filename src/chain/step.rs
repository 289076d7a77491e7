//! The capability every link in a chain provides.

use std::fmt;

/// A single unit of validation logic.
///
/// Implementations hold only their own parameters. They borrow the candidate
/// for the duration of [`accepts`](ValidatorStep::accepts) and never keep it.
/// Linking a step to its successor is the chain's job, see
/// [`ChainBuilder`](super::ChainBuilder).
pub trait ValidatorStep: fmt::Debug {
    /// Stable snake_case identifier, used in reports and logs.
    fn name(&self) -> &str;

    /// The step's local predicate.
    ///
    /// Must be total over all strings, including the empty one.
    fn accepts(&self, candidate: &str) -> bool;

    /// Human-readable description of what the predicate requires.
    fn requirement(&self) -> String;
}
