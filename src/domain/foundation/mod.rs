//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! the evaluation domain.

mod errors;
mod levels;
mod method;

pub use errors::{ErrorCode, EvaluationError};
pub use levels::{Levels, DEFAULT_LEVEL_NAMES};
pub use method::WeightingMethod;
