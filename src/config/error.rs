//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Frequency groups must be between 1 and {max}, got {got}")]
    InvalidFrequencyGroups { got: usize, max: usize },

    #[error("Invalid evaluation levels: {0}")]
    InvalidLevels(String),

    #[error("Log level directive cannot be empty")]
    EmptyLogLevel,
}
