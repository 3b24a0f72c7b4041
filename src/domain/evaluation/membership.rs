//! Membership Calculator - level assignment and per-indicator membership frequencies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::data_matrix::value_range;
use super::{DataMatrix, Thresholds};
use crate::domain::foundation::{EvaluationError, Levels};

/// Indicator × level table of membership frequencies.
///
/// Row `i` is the share of samples whose indicator `i` value fell into each
/// level; every row sums to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipMatrix {
    rows: Vec<Vec<f64>>,
}

impl MembershipMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the membership row of one indicator.
    pub fn row(&self, indicator: usize) -> Option<&[f64]> {
        self.rows.get(indicator).map(Vec::as_slice)
    }

    /// Returns a single membership value.
    pub fn get(&self, indicator: usize, level: usize) -> Option<f64> {
        self.rows.get(indicator)?.get(level).copied()
    }

    pub fn indicator_count(&self) -> usize {
        self.rows.len()
    }

    pub fn level_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

/// Level assignment and membership computation.
pub struct MembershipCalculator;

impl MembershipCalculator {
    /// Computes the membership matrix for a data matrix.
    ///
    /// # Algorithm
    /// For each indicator, count samples per level (thresholds when present,
    /// equal-width bins otherwise) and divide by the sample count.
    ///
    /// # Errors
    /// Thresholds that do not fit the matrix or level count.
    pub fn compute(
        data: &DataMatrix,
        thresholds: &Thresholds,
        levels: &Levels,
    ) -> Result<MembershipMatrix, EvaluationError> {
        thresholds.validate(data.indicator_count(), levels.count())?;

        let samples = data.sample_count() as f64;
        let rows = (0..data.indicator_count())
            .map(|indicator| {
                Self::level_counts(data, thresholds, levels.count(), indicator)
                    .into_iter()
                    .map(|count| count as f64 / samples)
                    .collect()
            })
            .collect();

        let matrix = MembershipMatrix { rows };
        debug!(
            indicators = matrix.indicator_count(),
            levels = matrix.level_count(),
            "Computed membership matrix"
        );
        Ok(matrix)
    }

    /// Counts the samples falling into each level for one indicator.
    pub fn level_counts(
        data: &DataMatrix,
        thresholds: &Thresholds,
        level_count: usize,
        indicator: usize,
    ) -> Vec<usize> {
        let mut counts = vec![0usize; level_count];
        if level_count == 0 {
            return counts;
        }

        let values = data.column(indicator);
        match thresholds.for_indicator(indicator) {
            Some(cuts) => {
                for &value in &values {
                    counts[Self::threshold_level(value, cuts, level_count)] += 1;
                }
            }
            None => {
                let Some((min, max)) = value_range(&values) else {
                    return counts;
                };
                let width = half_span(min, max) / level_count as f64;
                if width <= 0.0 {
                    debug!(indicator, value = min, "Zero-variance indicator, all samples in first level");
                }
                for &value in &values {
                    counts[Self::binned_level(value, min, width, level_count)] += 1;
                }
            }
        }

        counts
    }

    /// First level whose cut point the value does not exceed, else the last level.
    fn threshold_level(value: f64, cuts: &[f64], level_count: usize) -> usize {
        cuts.iter()
            .position(|&cut| value <= cut)
            .unwrap_or(level_count - 1)
            .min(level_count - 1)
    }

    /// Equal-width bin index, clamped so the maximum lands in the last bin.
    ///
    /// `width` is measured on the halved scale of [`half_span`]. A zero width
    /// (constant indicator) puts every value in the first bin.
    fn binned_level(value: f64, min: f64, width: f64, level_count: usize) -> usize {
        if width <= 0.0 {
            return 0;
        }
        bin_index(half_span(min, value) / width, level_count)
    }
}

/// Half the distance from `low` to `high`, finite for any finite operands.
pub(crate) fn half_span(low: f64, high: f64) -> f64 {
    high / 2.0 - low / 2.0
}

/// Floors a fractional bin position into `0..bins`; non-finite positions
/// go to the last bin.
pub(crate) fn bin_index(position: f64, bins: usize) -> usize {
    let last = bins.saturating_sub(1);
    if !position.is_finite() {
        return last;
    }
    let index = position.floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(last)
    }
}
