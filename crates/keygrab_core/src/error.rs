//! # Interaction Error Types
//!
//! All errors that can occur while configuring or driving an interaction.

use thiserror::Error;

/// Errors that can occur in the interaction core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteractionError {
    /// A numeric range whose bounds are not strictly ordered and finite.
    #[error("invalid range: min {min} must be finite and less than max {max}")]
    InvalidRange {
        /// Lower bound that was supplied.
        min: f64,
        /// Upper bound that was supplied.
        max: f64,
    },

    /// A step size that is not strictly positive.
    #[error("invalid {name} step: {value} (steps must be finite and > 0)")]
    InvalidStep {
        /// Which step was rejected (`unit`, `shift` or `page`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Release requested while no grab is active.
    #[error("release called while the interaction is idle")]
    ReleaseWhileIdle,

    /// A key name that does not map to any known key.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for interaction operations.
pub type InteractionResult<T> = Result<T, InteractionError>;
