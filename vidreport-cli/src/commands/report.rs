//! Implementation of the report command.
//!
//! Builds the scan configuration from the parsed arguments, runs the scan
//! through vidreport-core, prints the plain text report and optionally
//! exports a Markdown copy.

use crate::cli::Cli;
use crate::config::{DEFAULT_REPORT_FILENAME, REPORT_BANNER};
use crate::error::{CliResult, print_error};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use vidreport_core::{CoreError, ReportStyle, ScanConfig, Scanner, render};

/// Converts parsed arguments into a core scan configuration.
pub fn scan_config_from_args(args: &Cli) -> ScanConfig {
    let defaults = ScanConfig::default();
    ScanConfig {
        max_depth: args.depth,
        jobs: args.jobs.unwrap_or(defaults.jobs),
        match_policy: args.match_policy.into(),
    }
}

/// Resolves where the Markdown report goes, if anywhere.
///
/// `--output` without a value writes `FOLDER/resume.md`.
pub fn resolve_output_path(folder: &Path, output: Option<&Option<PathBuf>>) -> Option<PathBuf> {
    match output? {
        Some(path) => Some(path.clone()),
        None => Some(folder.join(DEFAULT_REPORT_FILENAME)),
    }
}

/// Writes `contents` to `path`, creating or truncating the file.
pub fn write_report(path: &Path, contents: &str) -> CliResult<()> {
    fs::write(path, contents).map_err(|source| CoreError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs a scan and prints the report to `out`.
///
/// An invalid root is returned as an error before anything is printed. A
/// failed Markdown export is reported on stderr and does not fail the run.
pub fn run_report<W: Write>(args: &Cli, out: &mut W) -> CliResult<()> {
    let start_time = Instant::now();
    let config = scan_config_from_args(args);
    debug!("Scan configuration: {:?}", config);

    let scanner = Scanner::from_config(&config)?;
    let report = scanner.scan(&args.folder, config.max_depth)?;

    let plain = render(&report, ReportStyle::Plain);
    writeln!(out, "\n{REPORT_BANNER}\n")?;
    write!(out, "{plain}")?;
    out.flush()?;

    if let Some(path) = resolve_output_path(&args.folder, args.output.as_ref()) {
        let markdown = render(&report, ReportStyle::Markdown);
        match write_report(&path, &markdown) {
            Ok(()) => info!("Markdown report written to {}", path.display()),
            Err(e) => print_error(&e),
        }
    }

    info!("Finished in {:.2?}", start_time.elapsed());
    Ok(())
}

/// Runs the report command against stdout.
pub fn run_report_stdout(args: &Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_report(args, &mut handle)
}
