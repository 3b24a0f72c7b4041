//! EvaluateHandler - Command handler for a single fuzzy evaluation request.
//!
//! Resolves the request against configured defaults (method, levels,
//! frequency groups), builds the data matrix, and runs the evaluator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::select_numeric_rows;
use crate::config::EvaluationConfig;
use crate::domain::evaluation::{DataMatrix, EvaluationResult, FuzzyEvaluator, Thresholds};
use crate::domain::foundation::{EvaluationError, Levels, WeightingMethod};

/// Loosely typed table plus the indicator columns to evaluate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableInput {
    pub rows: Vec<Vec<Value>>,
    pub columns: Vec<usize>,
}

/// Command to evaluate one data set.
///
/// Exactly one of `data` and `table` provides the samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluateCommand {
    /// Samples × indicators.
    #[serde(default)]
    pub data: Vec<Vec<f64>>,
    /// Raw rows with column selection, instead of `data`.
    #[serde(default)]
    pub table: Option<TableInput>,
    /// Per-indicator cut points; `null` entries fall back to binning.
    #[serde(default)]
    pub thresholds: Option<Vec<Option<Vec<f64>>>>,
    #[serde(default)]
    pub levels: Option<Vec<String>>,
    /// Explicit weights; take precedence over `method`.
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub frequency_groups: Option<usize>,
}

/// Result of a successful evaluation command.
pub type EvaluateResult = EvaluationResult;

/// Errors reading a command from disk.
#[derive(Debug, Error)]
pub enum LoadCommandError {
    #[error("Failed to read command file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse command JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a command from JSON text.
pub fn parse_command(json: &str) -> Result<EvaluateCommand, LoadCommandError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a command from a JSON file.
pub fn load_command(path: &Path) -> Result<EvaluateCommand, LoadCommandError> {
    let content = fs::read_to_string(path)?;
    parse_command(&content)
}

/// Handler for evaluation commands.
pub struct EvaluateHandler {
    defaults: EvaluationConfig,
}

impl EvaluateHandler {
    pub fn new(defaults: EvaluationConfig) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, command: EvaluateCommand) -> Result<EvaluateResult, EvaluationError> {
        let data = Self::resolve_data(&command)?;

        let method = match command.method.as_deref() {
            Some(name) => name.parse::<WeightingMethod>()?,
            None => self.defaults.default_method,
        };

        let levels = match command.levels {
            Some(names) => Levels::new(names)?,
            None => Levels::new(self.defaults.levels.clone())?,
        };

        let thresholds = command
            .thresholds
            .map(Thresholds::from_optional)
            .unwrap_or_default();

        let groups = command
            .frequency_groups
            .unwrap_or(self.defaults.frequency_groups);

        let evaluator = FuzzyEvaluator::new(levels)
            .with_thresholds(thresholds)
            .with_frequency_groups(groups);

        debug!(
            samples = data.sample_count(),
            indicators = data.indicator_count(),
            method = %method,
            levels = %evaluator.levels(),
            thresholds = !evaluator.thresholds().is_empty(),
            groups = evaluator.frequency_groups(),
            "Handling evaluate command"
        );

        let result = evaluator.evaluate(&data, command.weights.as_deref(), method)?;

        info!(
            final_level = %result.final_level,
            samples = data.sample_count(),
            "Evaluation finished"
        );

        Ok(result)
    }

    fn resolve_data(command: &EvaluateCommand) -> Result<DataMatrix, EvaluationError> {
        match (&command.table, command.data.is_empty()) {
            (Some(_), false) => Err(EvaluationError::invalid_input(
                "provide either data or table, not both",
            )),
            (Some(table), true) => select_numeric_rows(&table.rows, &table.columns),
            (None, _) => DataMatrix::new(command.data.clone()),
        }
    }
}
