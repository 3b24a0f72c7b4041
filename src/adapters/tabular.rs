//! Tabular Rows - selects numeric indicator columns from loosely typed rows.
//!
//! Spreadsheet exports and hand-edited JSON tables mix headers, blanks, and
//! text with the numbers being evaluated. This adapter keeps only the rows
//! that carry a number in every selected column.

use serde_json::Value;
use tracing::debug;

use crate::domain::evaluation::DataMatrix;
use crate::domain::foundation::EvaluationError;

/// Builds a data matrix from the selected columns of loosely typed rows.
///
/// For each row, the cells at `columns` (in the given order) are kept when
/// they are JSON numbers; missing or non-numeric cells are dropped. A row
/// contributes a sample only if every selected column yielded a number.
///
/// # Errors
/// - No columns selected
/// - No row covers every selected column
pub fn select_numeric_rows(
    rows: &[Vec<Value>],
    columns: &[usize],
) -> Result<DataMatrix, EvaluationError> {
    if columns.is_empty() {
        return Err(EvaluationError::invalid_input(
            "at least one indicator column must be selected",
        ));
    }

    let mut samples = Vec::new();
    for row in rows {
        let values: Vec<f64> = columns
            .iter()
            .filter_map(|&col| row.get(col).and_then(Value::as_f64))
            .collect();

        if values.len() == columns.len() {
            samples.push(values);
        }
    }

    debug!(
        total_rows = rows.len(),
        kept_rows = samples.len(),
        columns = ?columns,
        "Selected numeric rows"
    );

    if samples.is_empty() {
        return Err(EvaluationError::invalid_input(format!(
            "no row has numeric values in every selected column {:?}",
            columns
        )));
    }

    DataMatrix::new(samples)
}
