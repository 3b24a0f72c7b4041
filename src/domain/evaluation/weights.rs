//! Weight Calculator - entropy, frequency, and average indicator weighting.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::data_matrix::value_range;
use super::membership::{bin_index, half_span};
use super::{DataMatrix, MembershipMatrix};
use crate::domain::foundation::{EvaluationError, WeightingMethod};

/// Default number of value groups used by frequency weighting.
pub const DEFAULT_FREQUENCY_GROUPS: usize = 10;

/// Upper bound on the group count accepted by frequency weighting.
pub const MAX_FREQUENCY_GROUPS: usize = 10_000;

/// Divergences `1 - e` below this are treated as zero.
const ENTROPY_EPSILON: f64 = 1e-12;

/// One non-negative weight per indicator, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Equal weights `1/n` for `n` indicators.
    pub fn equal(indicator_count: usize) -> Self {
        let share = 1.0 / indicator_count.max(1) as f64;
        Self(vec![share; indicator_count])
    }

    /// Validates caller-supplied weights and normalizes them to sum 1.
    ///
    /// # Errors
    /// - Length differs from the indicator count
    /// - Any weight is negative or not finite
    /// - All weights are zero
    pub fn from_supplied(weights: &[f64], indicator_count: usize) -> Result<Self, EvaluationError> {
        if weights.len() != indicator_count {
            return Err(EvaluationError::invalid_input(format!(
                "{} weights supplied for {} indicators",
                weights.len(),
                indicator_count
            )));
        }
        if let Some(idx) = weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
            return Err(EvaluationError::invalid_input(format!(
                "weight {} must be a finite non-negative number",
                idx
            )));
        }

        Self::normalized(weights.to_vec())
            .ok_or_else(|| EvaluationError::invalid_input("supplied weights sum to zero"))
    }

    /// Scales raw weights to sum 1; None when they cannot form a weight vector.
    fn normalized(raw: Vec<f64>) -> Option<Self> {
        if raw.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return None;
        }
        let total: f64 = raw.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        Some(Self(raw.into_iter().map(|w| w / total).collect()))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, indicator: usize) -> Option<f64> {
        self.0.get(indicator).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Indicator weighting functions.
pub struct WeightCalculator;

impl WeightCalculator {
    /// Computes weights with the requested method.
    ///
    /// # Errors
    /// Frequency weighting with zero groups.
    pub fn compute(
        method: WeightingMethod,
        data: &DataMatrix,
        membership: &MembershipMatrix,
        frequency_groups: usize,
    ) -> Result<WeightVector, EvaluationError> {
        match method {
            WeightingMethod::Entropy => Ok(Self::entropy(membership)),
            WeightingMethod::Frequency => Self::frequency(data, frequency_groups),
            WeightingMethod::Average => Ok(Self::average(data.indicator_count())),
        }
    }

    /// Normalized Shannon entropy of each indicator's membership row.
    ///
    /// Zero-frequency levels contribute nothing. With a single level the
    /// normalizer `1/ln L` is undefined and every entropy is 0.
    pub fn entropies(membership: &MembershipMatrix) -> Vec<f64> {
        let level_count = membership.level_count();
        if level_count <= 1 {
            return vec![0.0; membership.indicator_count()];
        }

        let k = -1.0 / (level_count as f64).ln();
        membership
            .rows()
            .iter()
            .map(|row| {
                k * row
                    .iter()
                    .filter(|&&m| m > 0.0)
                    .map(|&m| m * m.ln())
                    .sum::<f64>()
            })
            .collect()
    }

    /// Entropy weighting: `w_i = (1 - e_i) / (n - Σ e)`.
    ///
    /// # Edge Cases
    /// - Every row fully uniform (`n - Σ e == 0`): equal weights
    /// - Rounding pushing `e_i` to or above 1: that indicator gets weight 0
    pub fn entropy(membership: &MembershipMatrix) -> WeightVector {
        let indicator_count = membership.indicator_count();
        let entropies = Self::entropies(membership);
        debug!(?entropies, "Computed indicator entropies");

        let divergence: Vec<f64> = entropies
            .iter()
            .map(|e| {
                let d = 1.0 - e;
                if d < ENTROPY_EPSILON {
                    0.0
                } else {
                    d
                }
            })
            .collect();
        match WeightVector::normalized(divergence) {
            Some(weights) => weights,
            None => {
                warn!(
                    indicators = indicator_count,
                    "All indicators have maximal entropy, falling back to equal weights"
                );
                WeightVector::equal(indicator_count)
            }
        }
    }

    /// Frequency weighting: midpoint of each indicator's modal value group.
    ///
    /// # Edge Cases
    /// - Zero-variance indicator: raw weight is its constant value
    /// - Negative or zero raw weights: equal weights
    ///
    /// # Errors
    /// `groups` outside `1..=MAX_FREQUENCY_GROUPS`.
    pub fn frequency(data: &DataMatrix, groups: usize) -> Result<WeightVector, EvaluationError> {
        if groups == 0 || groups > MAX_FREQUENCY_GROUPS {
            return Err(EvaluationError::invalid_input(format!(
                "frequency weighting needs between 1 and {} groups, got {}",
                MAX_FREQUENCY_GROUPS, groups
            )));
        }

        let raw: Vec<f64> = (0..data.indicator_count())
            .map(|indicator| Self::modal_midpoint(&data.column(indicator), groups))
            .collect();
        debug!(?raw, groups, "Computed modal group midpoints");

        match WeightVector::normalized(raw) {
            Some(weights) => Ok(weights),
            None => {
                warn!(
                    indicators = data.indicator_count(),
                    "Modal midpoints cannot be normalized, falling back to equal weights"
                );
                Ok(WeightVector::equal(data.indicator_count()))
            }
        }
    }

    /// Midpoint of the most populated of `groups` equal-width groups over
    /// `[min, max]`. The first group wins ties.
    ///
    /// `groups` is clamped to `1..=MAX_FREQUENCY_GROUPS`. Gaps are measured
    /// on the halved scale so ranges wider than `f64::MAX` stay finite.
    pub fn modal_midpoint(values: &[f64], groups: usize) -> f64 {
        let Some((min, max)) = value_range(values) else {
            return 0.0;
        };
        let groups = groups.clamp(1, MAX_FREQUENCY_GROUPS);
        let half_gap = half_span(min, max) / groups as f64;
        if half_gap <= 0.0 {
            return min;
        }

        let mut counts = vec![0usize; groups];
        for &value in values {
            counts[bin_index(half_span(min, value) / half_gap, groups)] += 1;
        }

        let mut modal = 0;
        for (index, &count) in counts.iter().enumerate() {
            if count > counts[modal] {
                modal = index;
            }
        }

        (min / 2.0 + (modal as f64 + 0.5) * half_gap) * 2.0
    }

    /// Equal weights.
    pub fn average(indicator_count: usize) -> WeightVector {
        WeightVector::equal(indicator_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::{MembershipCalculator, Thresholds};
    use crate::domain::foundation::Levels;

    const TOLERANCE: f64 = 1e-9;

    fn membership_of(rows: Vec<Vec<f64>>, thresholds: Thresholds) -> MembershipMatrix {
        let data = DataMatrix::new(rows).unwrap();
        MembershipCalculator::compute(&data, &thresholds, &Levels::default()).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOLERANCE, "{:?} != {:?}", actual, expected);
        }
    }

    // Weight Vector Tests

    #[test]
    fn equal_weights_sum_to_one() {
        let weights = WeightVector::equal(3);
        assert_close(weights.values(), &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        assert!((weights.sum() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn supplied_weights_are_normalized() {
        let weights = WeightVector::from_supplied(&[2.0, 1.0, 1.0], 3).unwrap();
        assert_close(weights.values(), &[0.5, 0.25, 0.25]);
    }

    #[test]
    fn supplied_weights_length_must_match() {
        let err = WeightVector::from_supplied(&[0.5, 0.5], 3).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::invalid_input("2 weights supplied for 3 indicators")
        );
    }

    #[test]
    fn supplied_weights_reject_negative_and_zero_sum() {
        assert!(WeightVector::from_supplied(&[1.0, -0.5], 2).is_err());
        assert!(WeightVector::from_supplied(&[0.0, 0.0], 2).is_err());
        assert!(WeightVector::from_supplied(&[f64::NAN, 1.0], 2).is_err());
    }

    // Entropy Tests

    #[test]
    fn entropy_of_concentrated_row_is_zero() {
        let membership = membership_of(vec![vec![1.0], vec![1.0]], Thresholds::none());
        assert_close(&WeightCalculator::entropies(&membership), &[0.0]);
    }

    #[test]
    fn entropy_of_uniform_row_is_one() {
        let membership = membership_of(
            vec![vec![0.5], vec![1.5], vec![2.5], vec![3.5]],
            Thresholds::new(vec![vec![1.0, 2.0, 3.0]]),
        );
        assert_close(&WeightCalculator::entropies(&membership), &[1.0]);
    }

    #[test]
    fn entropy_favours_concentrated_indicator() {
        // Indicator 0 spreads over all four levels, indicator 1 is constant.
        let membership = membership_of(
            vec![
                vec![0.5, 7.0],
                vec![1.5, 7.0],
                vec![2.5, 7.0],
                vec![3.5, 7.0],
            ],
            Thresholds::new(vec![vec![1.0, 2.0, 3.0]]),
        );

        let weights = WeightCalculator::entropy(&membership);
        assert_close(weights.values(), &[0.0, 1.0]);
    }

    #[test]
    fn entropy_all_uniform_falls_back_to_equal_weights() {
        let membership = membership_of(
            vec![
                vec![0.5, 0.5],
                vec![1.5, 1.5],
                vec![2.5, 2.5],
                vec![3.5, 3.5],
            ],
            Thresholds::new(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]]),
        );

        let weights = WeightCalculator::entropy(&membership);
        assert_close(weights.values(), &[0.5, 0.5]);
    }

    #[test]
    fn entropy_weights_match_hand_computed_values() {
        // Indicator 0 membership [0.5, 0.5, 0, 0], indicator 1 [0.5, 0.25, 0.25, 0].
        let membership = membership_of(
            vec![
                vec![0.5, 0.5],
                vec![0.5, 0.5],
                vec![1.5, 1.5],
                vec![1.5, 2.5],
            ],
            Thresholds::new(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]]),
        );

        let ln4 = 4f64.ln();
        let e0 = 2f64.ln() / ln4;
        let e1 = (0.5 * 2f64.ln() + 0.5 * 4f64.ln()) / ln4;
        assert_close(&WeightCalculator::entropies(&membership), &[0.5, 0.75]);
        assert_close(&[e0, e1], &[0.5, 0.75]);

        // w = (1 - e) / (2 - 1.25) = [0.5 / 0.75, 0.25 / 0.75]
        let weights = WeightCalculator::entropy(&membership);
        assert_close(weights.values(), &[2.0 / 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn entropy_single_level_gives_equal_weights() {
        let data = DataMatrix::new(vec![vec![1.0, 4.0], vec![2.0, 8.0]]).unwrap();
        let levels = Levels::new(vec!["pass"]).unwrap();
        let membership = MembershipCalculator::compute(&data, &Thresholds::none(), &levels).unwrap();

        let weights = WeightCalculator::entropy(&membership);
        assert_close(weights.values(), &[0.5, 0.5]);
    }

    // Frequency Tests

    #[test]
    fn modal_midpoint_picks_most_populated_group() {
        // gap = 1.0 over [0, 10]; group 2 ([2,3)) holds three values
        let values = [0.0, 2.1, 2.5, 2.9, 5.0, 10.0];
        let mid = WeightCalculator::modal_midpoint(&values, 10);
        assert!((mid - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn modal_midpoint_ties_resolve_to_first_group() {
        let values = [0.0, 1.0, 2.0, 3.0];
        // gap = 1.0 over [0, 3] with 3 groups: counts [1, 1, 2]
        assert!((WeightCalculator::modal_midpoint(&values, 3) - 2.5).abs() < TOLERANCE);

        // gap = 1.5 over [0, 3] with 2 groups: counts [2, 2], first wins
        assert!((WeightCalculator::modal_midpoint(&values, 2) - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn modal_midpoint_zero_variance_returns_constant() {
        let values = [1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(WeightCalculator::modal_midpoint(&values, 10), 1.0);
    }

    #[test]
    fn modal_midpoint_survives_extreme_range() {
        // Halved gap 1e307: both values fill groups 0 and 9, the first wins.
        let mid = WeightCalculator::modal_midpoint(&[-1e308, 1e308], 10);
        assert!(mid.is_finite());
        assert!((mid / -9e307 - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn modal_midpoint_clamps_group_count() {
        let values = [0.0, 1.0, 1.0];
        let mid = WeightCalculator::modal_midpoint(&values, usize::MAX);
        let gap = 1.0 / MAX_FREQUENCY_GROUPS as f64;
        assert!((mid - (1.0 - gap / 2.0)).abs() < TOLERANCE);
    }

    #[test]
    fn frequency_zero_variance_indicator_gets_defined_weight() {
        let data = DataMatrix::new(vec![vec![1.0]; 5]).unwrap();
        let weights = WeightCalculator::frequency(&data, 10).unwrap();
        assert_close(weights.values(), &[1.0]);
    }

    #[test]
    fn frequency_normalizes_midpoints() {
        let data = DataMatrix::new(vec![vec![1.0, 3.0], vec![1.0, 3.0]]).unwrap();
        let weights = WeightCalculator::frequency(&data, 10).unwrap();
        assert_close(weights.values(), &[0.25, 0.75]);
    }

    #[test]
    fn frequency_negative_midpoints_fall_back_to_equal_weights() {
        let data = DataMatrix::new(vec![vec![-1.0, 3.0], vec![-1.0, 3.0]]).unwrap();
        let weights = WeightCalculator::frequency(&data, 10).unwrap();
        assert_close(weights.values(), &[0.5, 0.5]);
    }

    #[test]
    fn frequency_rejects_zero_groups() {
        let data = DataMatrix::new(vec![vec![1.0]]).unwrap();
        assert!(WeightCalculator::frequency(&data, 0).is_err());
    }

    #[test]
    fn frequency_rejects_oversized_group_count() {
        let data = DataMatrix::new(vec![vec![1.0], vec![2.0]]).unwrap();

        let err = WeightCalculator::frequency(&data, usize::MAX).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidInput { .. }));
        assert!(WeightCalculator::frequency(&data, MAX_FREQUENCY_GROUPS).is_ok());
    }

    // Dispatch Tests

    #[test]
    fn compute_dispatches_on_method() {
        let data = DataMatrix::new(vec![vec![1.0, 3.0], vec![2.0, 3.0]]).unwrap();
        let membership =
            MembershipCalculator::compute(&data, &Thresholds::none(), &Levels::default()).unwrap();

        for method in WeightingMethod::ALL {
            let weights = WeightCalculator::compute(method, &data, &membership, 10).unwrap();
            assert_eq!(weights.len(), 2);
            assert!((weights.sum() - 1.0).abs() < TOLERANCE);
        }

        let average = WeightCalculator::compute(WeightingMethod::Average, &data, &membership, 10)
            .unwrap();
        assert_close(average.values(), &[0.5, 0.5]);
    }
}
