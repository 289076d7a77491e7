//! Chain of responsibility for password validation.
//!
//! A [`Chain`] is an ordered, non-empty sequence of [`ValidatorStep`]s. The
//! candidate is handed to the head step; every step either rejects it on the
//! spot or passes it on to its successor, and the chain accepts only when the
//! last step accepts.
//!
//! Chains are assembled once with [`ChainBuilder`] and frozen by
//! [`ChainBuilder::build`]. The builder owns each appended step, so a chain
//! cannot loop back on itself.
//!
//! ```
//! use passchain::chain::ChainBuilder;
//! use passchain::steps::{ContainsCharacter, HasMixedCase, LengthInRange, NotEmpty};
//!
//! let chain = ChainBuilder::new(NotEmpty)
//!     .append(LengthInRange::with_min(10))
//!     .append(ContainsCharacter::new('S'))
//!     .append(HasMixedCase)
//!     .build();
//!
//! assert!(!chain.validate("ASD123as"));
//! assert!(chain.validate("ASD123asS9"));
//! ```

mod builder;
mod report;
mod step;
mod validation;


// Re-export public API
pub use builder::ChainBuilder;
pub use report::{ChainReport, StepOutcome, StepStatus};
pub use step::ValidatorStep;
pub use validation::Chain;
