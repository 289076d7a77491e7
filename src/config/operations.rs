//! Config loading, validation, and chain assembly.

use super::model::Config;
use super::types::StepConfig;
use crate::chain::{Chain, ChainBuilder};
use crate::error::{PasschainError, Result};
use crate::steps::ContainsCharacter;
use std::path::Path;
use tracing::{debug, info};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "passchain.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PasschainError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PasschainError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        info!(path = %path.display(), steps = config.steps.len(), "loaded config");
        Ok(config)
    }

    /// Pick the config for a command.
    ///
    /// An explicit path must load. Otherwise `passchain.yaml` in `dir` is used
    /// when present, and the built-in default chain when it is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(candidate);
        }

        debug!("no config file found, using built-in chain");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PasschainError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PasschainError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `steps` must not be empty
    /// - `length_in_range` steps must have `min_size <= max_size`
    /// - `contains_character` steps must name exactly one character
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(PasschainError::ConfigError(
                "steps must contain at least one entry".to_string(),
            ));
        }

        for (i, step) in self.steps.iter().enumerate() {
            if let StepConfig::LengthInRange { min_size, max_size } = step
                && min_size > max_size
            {
                return Err(PasschainError::ConfigError(format!(
                    "step {} ({}): min_size ({}) must not exceed max_size ({})",
                    i + 1,
                    step.kind(),
                    min_size,
                    max_size
                )));
            }

            if let StepConfig::ContainsCharacter { character } = step
                && ContainsCharacter::from_grapheme(character).is_none()
            {
                return Err(PasschainError::ConfigError(format!(
                    "step {} ({}): character must be exactly one character (found '{}')",
                    i + 1,
                    step.kind(),
                    character
                )));
            }
        }

        Ok(())
    }

    /// Validate the config and assemble the chain it describes.
    pub fn build_chain(&self) -> Result<Chain> {
        self.validate()?;

        let mut steps = self
            .steps
            .iter()
            .map(StepConfig::to_step)
            .collect::<Result<Vec<_>>>()?
            .into_iter();
        let head = steps.next().ok_or_else(|| {
            PasschainError::ConfigError("steps must contain at least one entry".to_string())
        })?;

        Ok(steps
            .fold(ChainBuilder::from_boxed(head), ChainBuilder::append_boxed)
            .build())
    }
}

