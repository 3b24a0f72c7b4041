//! Evaluation levels - the ordered categories memberships are computed over.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::EvaluationError;

/// The four-grade scale used when callers do not name their own levels.
pub const DEFAULT_LEVEL_NAMES: &[&str] = &["excellent", "good", "fair", "poor"];

/// An ordered, named sequence of evaluation levels.
///
/// Index 0 is the first level a value can fall into; with thresholds, values
/// at or below the first cut point land there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Levels(Vec<String>);

impl Levels {
    /// Creates a level scale, rejecting empty, blank, or duplicate names.
    pub fn new<S: Into<String>>(names: Vec<S>) -> Result<Self, EvaluationError> {
        let names: Vec<String> = names.into_iter().map(|s| s.into()).collect();

        if names.is_empty() {
            return Err(EvaluationError::invalid_input(
                "at least one evaluation level is required",
            ));
        }

        let mut seen = HashSet::new();
        for name in &names {
            if name.trim().is_empty() {
                return Err(EvaluationError::invalid_input(
                    "evaluation level names cannot be blank",
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(EvaluationError::invalid_input(format!(
                    "duplicate evaluation level '{}'",
                    name
                )));
            }
        }

        Ok(Self(names))
    }

    /// Returns the number of levels.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Returns the name of the level at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Returns the position of a named level.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self(DEFAULT_LEVEL_NAMES.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for Levels {
    type Error = EvaluationError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Levels> for Vec<String> {
    fn from(levels: Levels) -> Self {
        levels.0
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
