//! Command implementations for the CLI.

/// Module containing the implementation of the report command.
/// Scans a folder and prints (and optionally exports) the duration report.
pub mod report;
