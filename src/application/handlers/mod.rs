//! Command handlers for the application layer.

pub mod evaluation;

pub use evaluation::{
    load_command, parse_command, EvaluateCommand, EvaluateHandler, EvaluateResult,
    LoadCommandError, TableInput,
};
