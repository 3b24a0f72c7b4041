//! Evaluation defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::evaluation::{DEFAULT_FREQUENCY_GROUPS, MAX_FREQUENCY_GROUPS};
use crate::domain::foundation::{Levels, WeightingMethod, DEFAULT_LEVEL_NAMES};

/// Defaults applied to evaluation requests that leave them unset
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EvaluationConfig {
    /// Weighting method when a request names none
    #[serde(default)]
    pub default_method: WeightingMethod,

    /// Group count for frequency weighting
    #[serde(default = "default_frequency_groups")]
    pub frequency_groups: usize,

    /// Level names when a request names none
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
}

impl EvaluationConfig {
    /// Builds the validated level scale
    pub fn level_scale(&self) -> Result<Levels, ValidationError> {
        Levels::new(self.levels.clone()).map_err(|e| ValidationError::InvalidLevels(e.to_string()))
    }

    /// Validate evaluation defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frequency_groups == 0 || self.frequency_groups > MAX_FREQUENCY_GROUPS {
            return Err(ValidationError::InvalidFrequencyGroups {
                got: self.frequency_groups,
                max: MAX_FREQUENCY_GROUPS,
            });
        }
        self.level_scale()?;
        Ok(())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            default_method: WeightingMethod::default(),
            frequency_groups: default_frequency_groups(),
            levels: default_levels(),
        }
    }
}

fn default_frequency_groups() -> usize {
    DEFAULT_FREQUENCY_GROUPS
}

fn default_levels() -> Vec<String> {
    DEFAULT_LEVEL_NAMES.iter().map(|s| s.to_string()).collect()
}
