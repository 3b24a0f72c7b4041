//! Weighting method - how indicator weights are derived when none are supplied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EvaluationError;

/// Closed set of indicator weighting strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingMethod {
    /// Entropy weighting over the membership matrix.
    #[default]
    Entropy,
    /// Midpoint of each indicator's modal value group.
    Frequency,
    /// Equal weight for every indicator.
    Average,
}

impl WeightingMethod {
    /// All supported methods, in declaration order.
    pub const ALL: [WeightingMethod; 3] = [
        WeightingMethod::Entropy,
        WeightingMethod::Frequency,
        WeightingMethod::Average,
    ];

    /// Returns the wire name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightingMethod::Entropy => "entropy",
            WeightingMethod::Frequency => "frequency",
            WeightingMethod::Average => "average",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            WeightingMethod::Entropy => "Entropy Weighting",
            WeightingMethod::Frequency => "Frequency Weighting",
            WeightingMethod::Average => "Average Weighting",
        }
    }
}

impl FromStr for WeightingMethod {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entropy" => Ok(WeightingMethod::Entropy),
            "frequency" => Ok(WeightingMethod::Frequency),
            "average" => Ok(WeightingMethod::Average),
            _ => Err(EvaluationError::unsupported_method(s)),
        }
    }
}

impl fmt::Display for WeightingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
