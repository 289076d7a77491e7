//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a validation chain.
///
/// This struct represents the contents of `passchain.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Steps in evaluation order, head first.
    #[serde(default = "default_steps")]
    pub steps: Vec<StepConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}
