// vidreport-cli/src/config.rs
//
// Defines default configuration constants for the `vidreport` binary,
// primarily related to report output.

/// File name used when `--output` is given without a path.
pub const DEFAULT_REPORT_FILENAME: &str = "resume.md";

/// Banner printed before the plain text report.
pub const REPORT_BANNER: &str = "=== Video Duration Report ===";
