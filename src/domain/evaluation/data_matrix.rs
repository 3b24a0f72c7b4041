//! Data Matrix - samples × indicators input to an evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EvaluationError;

/// Rectangular matrix of finite indicator values, one row per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DataMatrix {
    rows: Vec<Vec<f64>>,
    indicator_count: usize,
}

impl DataMatrix {
    /// Creates a data matrix from sample rows.
    ///
    /// # Errors
    /// - No samples, or samples with no indicators
    /// - Ragged rows (a row whose length differs from the first row)
    /// - Non-finite values (NaN or infinity)
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, EvaluationError> {
        let indicator_count = match rows.first() {
            None => return Err(EvaluationError::invalid_input("data matrix has no samples")),
            Some(first) if first.is_empty() => {
                return Err(EvaluationError::invalid_input(
                    "data matrix has no indicator columns",
                ))
            }
            Some(first) => first.len(),
        };

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != indicator_count {
                return Err(EvaluationError::invalid_input(format!(
                    "sample {} has {} values, expected {}",
                    row_idx,
                    row.len(),
                    indicator_count
                )));
            }
            if let Some(col_idx) = row.iter().position(|v| !v.is_finite()) {
                return Err(EvaluationError::invalid_input(format!(
                    "sample {} indicator {} is not a finite number",
                    row_idx, col_idx
                )));
            }
        }

        Ok(Self {
            rows,
            indicator_count,
        })
    }

    /// Returns the number of samples (rows).
    pub fn sample_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of indicators (columns).
    pub fn indicator_count(&self) -> usize {
        self.indicator_count
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Collects one indicator's values across all samples.
    ///
    /// Returns an empty Vec for an out-of-range indicator.
    pub fn column(&self, indicator: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(indicator).copied())
            .collect()
    }

    /// Returns the observed (min, max) of one indicator.
    pub fn column_range(&self, indicator: usize) -> Option<(f64, f64)> {
        value_range(&self.column(indicator))
    }
}

/// Returns (min, max) of a slice, or None when it is empty.
pub(crate) fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

impl TryFrom<Vec<Vec<f64>>> for DataMatrix {
    type Error = EvaluationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DataMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DataMatrix) -> Self {
        matrix.rows
    }
}
