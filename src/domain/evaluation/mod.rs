//! Evaluation Module - Pure domain services for fuzzy comprehensive evaluation.
//!
//! # Components
//!
//! - `DataMatrix` - Validated samples × indicators input
//! - `Thresholds` - Optional per-indicator cut points
//! - `MembershipCalculator` - Level assignment and membership frequencies
//! - `WeightCalculator` - Entropy, frequency, and average weighting
//! - `FuzzyEvaluator` - Weighted combination and final verdict
//!
//! Every function is a pure computation over its inputs; nothing is cached
//! or shared between calls.

mod data_matrix;
mod evaluator;
mod membership;
mod thresholds;
mod weights;

pub use data_matrix::DataMatrix;
pub use evaluator::{evaluate, EvaluationResult, FuzzyEvaluator, LevelScore};
pub use membership::{MembershipCalculator, MembershipMatrix};
pub use thresholds::{Thresholds, ThresholdsBuilder};
pub use weights::{
    WeightCalculator, WeightVector, DEFAULT_FREQUENCY_GROUPS, MAX_FREQUENCY_GROUPS,
};
