// ============================================================================
// vidreport-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the vidreport binary
//
// Log records go to stderr so that stdout carries only the report. The
// default level is `warn`, which surfaces per-file probe and size failures;
// `--verbose` raises it to `debug`. RUST_LOG overrides both:
// - RUST_LOG=info: scan start and completion summary
// - RUST_LOG=debug: per-directory and per-file detail
// - RUST_LOG=trace: very verbose debugging information

use log::LevelFilter;
use std::io::Write;

/// Returns the default log level for the given verbosity.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes the global logger. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let result = env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(buf, "{style}{:<5}{style:#} {}", record.level(), record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {}", default_level(verbose));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }
}
