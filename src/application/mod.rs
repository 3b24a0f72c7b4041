//! Application layer - Commands and Handlers.
//!
//! This layer resolves requests against configured defaults and orchestrates
//! the pure domain services.

pub mod handlers;

pub use handlers::{
    load_command, parse_command, EvaluateCommand, EvaluateHandler, EvaluateResult,
    LoadCommandError, TableInput,
};
