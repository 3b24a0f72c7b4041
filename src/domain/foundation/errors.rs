//! Error types for the evaluation domain.

use std::fmt;
use thiserror::Error;

/// Errors raised by a single evaluation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Unsupported weighting method '{method}' (expected entropy, frequency or average)")]
    UnsupportedMethod { method: String },
}

impl EvaluationError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        EvaluationError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        EvaluationError::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::InvalidInput { .. } => ErrorCode::InvalidInput,
            EvaluationError::UnsupportedMethod { .. } => ErrorCode::UnsupportedMethod,
        }
    }
}

/// Error codes surfaced to callers (CLI output, logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    UnsupportedMethod,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::UnsupportedMethod => "UNSUPPORTED_METHOD",
        };
        write!(f, "{}", s)
    }
}
