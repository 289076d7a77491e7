//! Configuration types and defaults for passchain.

use crate::chain::ValidatorStep;
use crate::error::{PasschainError, Result};
use crate::steps::{
    ContainsCharacter, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, HasMixedCase, LengthInRange,
    LengthRange, NotEmpty,
};
use serde::{Deserialize, Serialize};

/// A single step entry in `passchain.yaml`.
///
/// Selected by the `kind` field:
///
/// ```yaml
/// - kind: not_empty
/// - kind: length_in_range
///   min_size: 10
/// - kind: contains_character
///   character: S
/// - kind: has_mixed_case
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepConfig {
    /// Candidate must be non-empty.
    NotEmpty,

    /// Candidate must contain lowercase and uppercase letters.
    HasMixedCase,

    /// Candidate must contain `character`, a single grapheme cluster.
    ContainsCharacter { character: String },

    /// Candidate length must lie in `[min_size, max_size)`.
    LengthInRange {
        #[serde(default = "default_min_size")]
        min_size: usize,
        #[serde(default = "default_max_size")]
        max_size: usize,
    },
}

impl StepConfig {
    /// Instantiate the validator step this entry describes.
    ///
    /// Fails when a `contains_character` entry is not exactly one character.
    pub fn to_step(&self) -> Result<Box<dyn ValidatorStep>> {
        let step: Box<dyn ValidatorStep> = match self {
            StepConfig::NotEmpty => Box::new(NotEmpty),
            StepConfig::HasMixedCase => Box::new(HasMixedCase),
            StepConfig::ContainsCharacter { character } => {
                let step = ContainsCharacter::from_grapheme(character).ok_or_else(|| {
                    PasschainError::ConfigError(format!(
                        "contains_character: character must be exactly one character (found '{}')",
                        character
                    ))
                })?;
                Box::new(step)
            }
            StepConfig::LengthInRange { min_size, max_size } => {
                Box::new(LengthInRange::new(LengthRange {
                    min_size: *min_size,
                    max_size: *max_size,
                }))
            }
        };
        Ok(step)
    }

    /// The `kind` tag used in YAML.
    pub fn kind(&self) -> &'static str {
        match self {
            StepConfig::NotEmpty => "not_empty",
            StepConfig::HasMixedCase => "has_mixed_case",
            StepConfig::ContainsCharacter { .. } => "contains_character",
            StepConfig::LengthInRange { .. } => "length_in_range",
        }
    }
}

/// Default chain: not empty, 10 to 11 chars, contains 'S', mixed case.
pub fn default_steps() -> Vec<StepConfig> {
    vec![
        StepConfig::NotEmpty,
        StepConfig::LengthInRange {
            min_size: 10,
            max_size: default_max_size(),
        },
        StepConfig::ContainsCharacter {
            character: "S".to_string(),
        },
        StepConfig::HasMixedCase,
    ]
}

// Default value functions for serde
pub(crate) fn default_min_size() -> usize {
    DEFAULT_MIN_SIZE
}
pub(crate) fn default_max_size() -> usize {
    DEFAULT_MAX_SIZE
}
