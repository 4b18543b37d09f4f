//! REPL Module
//!
//! Interactive read-dispatch-print loop over the cached client.

mod command;
mod input;
mod report;
mod session;

// Re-export public types
pub use command::Command;
pub use input::tokenize;
pub use report::StatsReport;
pub use session::{CommandOutput, Repl};
