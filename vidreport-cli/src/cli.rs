// vidreport-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vidreport_core::{DEFAULT_MAX_DEPTH, MatchPolicy};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidreport: Scans a folder and calculates the duration of the videos.",
    long_about = "Walks a folder to a bounded depth, measures every video and audio file \
                  with ffprobe, and prints per-folder and overall duration and size totals."
)]
pub struct Cli {
    /// Path of the folder to scan
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Maximum depth to scan, in folders below FOLDER
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,

    /// Also write the report as Markdown (defaults to FOLDER/resume.md)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,

    /// Number of files to probe in parallel (default: number of CPU cores)
    #[arg(short, long, value_name = "N", value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Rule deciding which files count as media
    #[arg(long = "match", value_enum, value_name = "POLICY", default_value_t = MatchArg::Mime)]
    pub match_policy: MatchArg,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchArg {
    /// MIME type guessed from the extension is video/* or audio/*
    Mime,
    /// Fixed list: mp4, mkv, avi, mov, mpg, mp3
    Extensions,
}

impl From<MatchArg> for MatchPolicy {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Mime => MatchPolicy::Mime,
            MatchArg::Extensions => MatchPolicy::Extensions,
        }
    }
}

fn parse_jobs(value: &str) -> Result<usize, String> {
    let jobs: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number"))?;
    if jobs == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(jobs)
}
