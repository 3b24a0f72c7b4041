//! Fuzzy Evaluator - combines weights and memberships into a verdict.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::{
    DataMatrix, MembershipCalculator, MembershipMatrix, Thresholds, WeightCalculator,
    WeightVector, DEFAULT_FREQUENCY_GROUPS,
};
use crate::domain::foundation::{EvaluationError, Levels, WeightingMethod};

/// The score of one level in the result vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelScore {
    pub level: String,
    pub score: f64,
}

/// Outcome of a comprehensive evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Method that produced the weights; None when the caller supplied them.
    pub method: Option<WeightingMethod>,
    pub weights: WeightVector,
    pub membership: MembershipMatrix,
    /// One score per level, in level order.
    pub scores: Vec<f64>,
    pub final_level: String,
    pub final_level_index: usize,
    /// Level name to score, in level order.
    pub level_scores: Vec<LevelScore>,
}

impl EvaluationResult {
    /// Returns the score of a named level.
    pub fn score_for(&self, level: &str) -> Option<f64> {
        self.level_scores
            .iter()
            .find(|ls| ls.level == level)
            .map(|ls| ls.score)
    }

    /// Returns the level scores keyed by level name.
    pub fn level_score_map(&self) -> HashMap<String, f64> {
        self.level_scores
            .iter()
            .map(|ls| (ls.level.clone(), ls.score))
            .collect()
    }
}

/// Fuzzy comprehensive evaluation over a fixed level scale.
///
/// # Algorithm
/// 1. Membership matrix from thresholds or equal-width bins
/// 2. Weights from the caller, or computed with the requested method
/// 3. `scores[j] = Σ_i w_i · m_ij`
/// 4. Final level = first level with the highest score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyEvaluator {
    levels: Levels,
    thresholds: Thresholds,
    frequency_groups: usize,
}

impl FuzzyEvaluator {
    /// Creates an evaluator with the given levels and no thresholds.
    pub fn new(levels: Levels) -> Self {
        Self {
            levels,
            thresholds: Thresholds::none(),
            frequency_groups: DEFAULT_FREQUENCY_GROUPS,
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the group count used by frequency weighting.
    pub fn with_frequency_groups(mut self, groups: usize) -> Self {
        self.frequency_groups = groups;
        self
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn frequency_groups(&self) -> usize {
        self.frequency_groups
    }

    /// Runs a comprehensive evaluation.
    ///
    /// `weights`, when given, take precedence over `method`; they are
    /// validated and normalized to sum 1.
    ///
    /// # Errors
    /// - Thresholds that do not fit the data or levels
    /// - Supplied weights of the wrong length, negative, or all zero
    /// - Frequency weighting with zero groups
    pub fn evaluate(
        &self,
        data: &DataMatrix,
        weights: Option<&[f64]>,
        method: WeightingMethod,
    ) -> Result<EvaluationResult, EvaluationError> {
        let membership = MembershipCalculator::compute(data, &self.thresholds, &self.levels)?;

        let (weights, method) = match weights {
            Some(supplied) => (
                WeightVector::from_supplied(supplied, data.indicator_count())?,
                None,
            ),
            None => (
                WeightCalculator::compute(method, data, &membership, self.frequency_groups)?,
                Some(method),
            ),
        };

        let scores = Self::combine(&weights, &membership);
        let final_level_index = Self::argmax(&scores);
        let final_level = self
            .levels
            .name(final_level_index)
            .unwrap_or_default()
            .to_string();

        let level_scores = self
            .levels
            .iter()
            .zip(&scores)
            .map(|(level, &score)| LevelScore {
                level: level.to_string(),
                score,
            })
            .collect();

        debug!(
            samples = data.sample_count(),
            indicators = data.indicator_count(),
            method = method.map(|m| m.as_str()).unwrap_or("supplied"),
            final_level = %final_level,
            "Fuzzy evaluation complete"
        );

        Ok(EvaluationResult {
            method,
            weights,
            membership,
            scores,
            final_level,
            final_level_index,
            level_scores,
        })
    }

    /// Weighted sum of each membership column.
    pub fn combine(weights: &WeightVector, membership: &MembershipMatrix) -> Vec<f64> {
        let mut scores = vec![0.0; membership.level_count()];
        for (weight, row) in weights.values().iter().zip(membership.rows()) {
            for (score, m) in scores.iter_mut().zip(row) {
                *score += weight * m;
            }
        }
        scores
    }

    /// Index of the highest score; the first wins ties.
    fn argmax(scores: &[f64]) -> usize {
        let mut best = 0;
        for (index, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = index;
            }
        }
        best
    }
}

impl Default for FuzzyEvaluator {
    fn default() -> Self {
        Self::new(Levels::default())
    }
}

/// Evaluates a data matrix in one call.
///
/// Missing thresholds mean equal-width binning for every indicator; missing
/// levels mean the default four-grade scale.
pub fn evaluate(
    data: &DataMatrix,
    thresholds: Option<&Thresholds>,
    levels: Option<&Levels>,
    weights: Option<&[f64]>,
    method: WeightingMethod,
) -> Result<EvaluationResult, EvaluationError> {
    let evaluator = FuzzyEvaluator::new(levels.cloned().unwrap_or_default())
        .with_thresholds(thresholds.cloned().unwrap_or_default());
    evaluator.evaluate(data, weights, method)
}
