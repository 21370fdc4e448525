// ============================================================================
// vidreport-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result type and error printing for the CLI
//
// The CLI reuses CoreError so that the invalid-root message produced by the
// scanner reaches the user unchanged.

use std::io::Write;

use owo_colors::{OwoColorize, Stream, Style};
use vidreport_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Prints `err` on stderr with a bold red `Error:` prefix when supported.
pub fn print_error(err: &dyn std::error::Error) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "Error:".if_supports_color(Stream::Stderr, |text| text.style(Style::new().red().bold())),
        err
    );
}

/// Whether `err` should end the process with a failure status.
pub fn is_fatal(err: &CoreError) -> bool {
    !matches!(err, CoreError::OutputWrite { .. })
}
