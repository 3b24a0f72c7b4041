//! Fuzzy Eval - Fuzzy Comprehensive Evaluation
//!
//! This crate buckets indicator values into evaluation levels, weights the
//! indicators (entropy, frequency, or average weighting), and combines both
//! into a per-level score and a final verdict.
//!
//! ```
//! use fuzzy_eval::domain::evaluation::{evaluate, DataMatrix};
//! use fuzzy_eval::domain::foundation::WeightingMethod;
//!
//! let data = DataMatrix::new(vec![vec![0.8, 0.6], vec![0.7, 0.8], vec![0.9, 0.7]]).unwrap();
//! let result = evaluate(&data, None, None, None, WeightingMethod::Entropy).unwrap();
//! assert_eq!(result.scores.len(), 4);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
