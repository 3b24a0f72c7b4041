//! Evaluation command handlers.

mod evaluate;

pub use evaluate::{
    load_command, parse_command, EvaluateCommand, EvaluateHandler, EvaluateResult,
    LoadCommandError, TableInput,
};
