//! Adapters - Edges between the evaluation domain and the outside world.
//!
//! - `logging` - tracing subscriber setup for the binary
//! - `tabular` - numeric column selection from loosely typed rows

pub mod logging;
pub mod tabular;

pub use logging::init_logging;
pub use tabular::select_numeric_rows;
