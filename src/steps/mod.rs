//! Concrete validator steps.
//!
//! Each step checks one property of the candidate and knows nothing about the
//! others, so any subset may be composed in any order.

mod contains_character;
mod length_in_range;
mod mixed_case;
mod not_empty;


// Re-export public API
pub use contains_character::ContainsCharacter;
pub use length_in_range::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, LengthInRange, LengthRange};
pub use mixed_case::HasMixedCase;
pub use not_empty::NotEmpty;
