// vidreport-cli/src/lib.rs
//
// Library portion of the vidreport CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, MatchArg};
pub use commands::report::{resolve_output_path, run_report, run_report_stdout};
