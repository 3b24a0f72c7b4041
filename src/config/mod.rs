//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FUZZY_EVAL` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use fuzzy_eval::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default method: {}", config.evaluation.default_method);
//! ```

mod error;
mod evaluation;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use evaluation::EvaluationConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Evaluation defaults (method, frequency groups, levels)
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FUZZY_EVAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `evaluation.levels` on commas
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FUZZY_EVAL__EVALUATION__DEFAULT_METHOD=frequency` -> `evaluation.default_method`
    /// - `FUZZY_EVAL__EVALUATION__LEVELS=high,medium,low` -> `evaluation.levels`
    /// - `FUZZY_EVAL__LOGGING__FORMAT=json` -> `logging.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FUZZY_EVAL")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("evaluation.levels"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.evaluation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
