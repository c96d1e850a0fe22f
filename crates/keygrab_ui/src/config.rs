//! # Interaction Configuration
//!
//! Step sizes, key-repeat timing and cue thresholds, loaded once at
//! startup from TOML. Every field has a default, so an empty document is
//! a valid configuration.
//!
//! ```toml
//! [steps]
//! unit_step = 1.0
//! shift_step = 2.0
//! # page_step omitted: ceil(range length / 5)
//!
//! [repeat]
//! initial_delay_ms = 500
//! interval_ms = 33
//!
//! [cues]
//! keyboard_grabs_before_hiding_grab_cue = 1
//! drag_cue_grab_limit = 1
//! ```

use crate::range::StepConfiguration;
use crate::repeat::RepeatTiming;
use keygrab_core::{CueVisibilityPolicy, InteractionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The document is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but a value is out of bounds.
    #[error(transparent)]
    Invalid(#[from] InteractionError),
}

/// Complete configuration for a sortable group interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    /// Step sizes for the sorting keys.
    pub steps: StepConfiguration,
    /// Held-key repeat timing.
    pub repeat: RepeatTiming,
    /// Cue thresholds.
    pub cues: CueVisibilityPolicy,
}

impl InteractionConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML, [`ConfigError::Invalid`]
    /// for out-of-bounds values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded interaction config");
        Ok(config)
    }

    /// Checks every value is within bounds.
    ///
    /// # Errors
    ///
    /// [`InteractionError::InvalidStep`] for bad steps,
    /// [`InteractionError::InvalidConfig`] for a zero repeat interval.
    pub fn validate(&self) -> Result<(), InteractionError> {
        self.steps.validate()?;
        if self.repeat.interval_ms == 0 {
            return Err(InteractionError::InvalidConfig(
                "repeat.interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
