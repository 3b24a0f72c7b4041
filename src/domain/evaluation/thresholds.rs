//! Thresholds - optional per-indicator cut points that partition values into levels.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EvaluationError;

/// Per-indicator cut points.
///
/// Entry `i` holds the cut points for indicator `i`. A missing entry (`None`,
/// or an index past the end) means that indicator is binned by equal width
/// over its observed range instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thresholds {
    cuts: Vec<Option<Vec<f64>>>,
}

impl Thresholds {
    /// No thresholds: every indicator uses equal-width binning.
    pub fn none() -> Self {
        Self::default()
    }

    /// Cut points for the leading indicators, in order.
    pub fn new(per_indicator: Vec<Vec<f64>>) -> Self {
        Self {
            cuts: per_indicator.into_iter().map(Some).collect(),
        }
    }

    /// Cut points where some indicators are left to equal-width binning.
    pub fn from_optional(per_indicator: Vec<Option<Vec<f64>>>) -> Self {
        Self {
            cuts: per_indicator,
        }
    }

    /// Creates a builder for sparse thresholds.
    pub fn builder() -> ThresholdsBuilder {
        ThresholdsBuilder::default()
    }

    /// Returns the cut points configured for an indicator.
    pub fn for_indicator(&self, indicator: usize) -> Option<&[f64]> {
        self.cuts.get(indicator).and_then(|c| c.as_deref())
    }

    /// Returns true if no indicator has cut points.
    pub fn is_empty(&self) -> bool {
        self.cuts.iter().all(Option::is_none)
    }

    /// Checks the thresholds against the matrix shape and level count.
    ///
    /// # Errors
    /// - More threshold entries than indicators
    /// - More cut points than levels for one indicator
    /// - Non-finite or decreasing cut points
    pub fn validate(
        &self,
        indicator_count: usize,
        level_count: usize,
    ) -> Result<(), EvaluationError> {
        if self.cuts.len() > indicator_count {
            return Err(EvaluationError::invalid_input(format!(
                "thresholds given for {} indicators but data has {}",
                self.cuts.len(),
                indicator_count
            )));
        }

        for (indicator, cuts) in self.cuts.iter().enumerate() {
            let Some(cuts) = cuts else { continue };

            if cuts.len() > level_count {
                return Err(EvaluationError::invalid_input(format!(
                    "indicator {} has {} cut points for {} levels",
                    indicator,
                    cuts.len(),
                    level_count
                )));
            }
            if cuts.iter().any(|c| !c.is_finite()) {
                return Err(EvaluationError::invalid_input(format!(
                    "indicator {} has a non-finite cut point",
                    indicator
                )));
            }
            if cuts.windows(2).any(|w| w[1] < w[0]) {
                return Err(EvaluationError::invalid_input(format!(
                    "indicator {} cut points must be non-decreasing",
                    indicator
                )));
            }
        }

        Ok(())
    }
}

/// Builder for sparse per-indicator thresholds.
#[derive(Debug, Default)]
pub struct ThresholdsBuilder {
    cuts: Vec<Option<Vec<f64>>>,
}

impl ThresholdsBuilder {
    /// Sets the cut points of one indicator.
    pub fn indicator(mut self, indicator: usize, cuts: Vec<f64>) -> Self {
        if self.cuts.len() <= indicator {
            self.cuts.resize(indicator + 1, None);
        }
        self.cuts[indicator] = Some(cuts);
        self
    }

    pub fn build(self) -> Thresholds {
        Thresholds { cuts: self.cuts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_cut_points() {
        let thresholds = Thresholds::none();
        assert!(thresholds.is_empty());
        assert!(thresholds.for_indicator(0).is_none());
    }

    #[test]
    fn new_covers_leading_indicators_only() {
        let thresholds = Thresholds::new(vec![vec![0.018, 0.028, 0.038], vec![1.0, 2.0, 3.0]]);
        assert_eq!(thresholds.for_indicator(1), Some(&[1.0, 2.0, 3.0][..]));
        assert!(thresholds.for_indicator(2).is_none());
    }

    #[test]
    fn builder_leaves_gaps_unset() {
        let thresholds = Thresholds::builder().indicator(2, vec![5.0]).build();
        assert!(thresholds.for_indicator(0).is_none());
        assert!(thresholds.for_indicator(1).is_none());
        assert_eq!(thresholds.for_indicator(2), Some(&[5.0][..]));
        assert!(!thresholds.is_empty());
    }

    #[test]
    fn validate_accepts_well_formed_cuts() {
        let thresholds = Thresholds::new(vec![vec![1.0, 2.0, 3.0]]);
        assert!(thresholds.validate(1, 4).is_ok());
    }

    #[test]
    fn validate_rejects_too_many_indicators() {
        let thresholds = Thresholds::new(vec![vec![1.0], vec![2.0]]);
        assert!(thresholds.validate(1, 4).is_err());
    }

    #[test]
    fn validate_rejects_too_many_cut_points() {
        let thresholds = Thresholds::new(vec![vec![1.0, 2.0, 3.0]]);
        let err = thresholds.validate(1, 2).unwrap_err();
        assert!(err.to_string().contains("3 cut points for 2 levels"));
    }

    #[test]
    fn validate_rejects_decreasing_cut_points() {
        let thresholds = Thresholds::new(vec![vec![3.0, 2.0]]);
        assert!(thresholds.validate(1, 4).is_err());
    }

    #[test]
    fn validate_rejects_non_finite_cut_points() {
        let thresholds = Thresholds::new(vec![vec![1.0, f64::NAN]]);
        assert!(thresholds.validate(1, 4).is_err());
    }

    #[test]
    fn deserializes_with_null_entries() {
        let thresholds: Thresholds = serde_json::from_str("[[1.0, 2.0], null]").unwrap();
        assert!(thresholds.for_indicator(0).is_some());
        assert!(thresholds.for_indicator(1).is_none());
    }
}
