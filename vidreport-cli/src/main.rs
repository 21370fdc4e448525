// vidreport-cli/src/main.rs
//
// Entry point for the vidreport binary.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging on stderr.
// - Running the report command and printing fatal errors.
// - Managing process exit codes based on success or failure.

use clap::Parser;
use std::process;

use vidreport_cli::error::{is_fatal, print_error};
use vidreport_cli::logging::init_logging;
use vidreport_cli::{Cli, run_report_stdout};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_report_stdout(&cli) {
        print_error(&e);
        if is_fatal(&e) {
            process::exit(1);
        }
    }
}
