//! Domain layer containing evaluation logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (levels, weighting methods, errors)
//! - `evaluation` - Pure domain services for fuzzy comprehensive evaluation

pub mod evaluation;
pub mod foundation;
