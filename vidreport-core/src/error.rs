// ============================================================================
// vidreport-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// Only `InvalidRoot` is fatal to a scan. Probe, stat and walk failures are
// logged by the scanner and degrade to zero-valued fields; `OutputWrite` is
// reported by the CLI without touching the printed report.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by vidreport-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("The path {} is not a valid folder.", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Error processing {}: {message}", .path.display())]
    Probe { path: PathBuf, message: String },

    #[error("Failed to read size of {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize worker pool: {0}")]
    ThreadPool(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for vidreport-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a probe failure for `path`.
pub fn probe_error(path: impl Into<PathBuf>, message: impl Into<String>) -> CoreError {
    CoreError::Probe {
        path: path.into(),
        message: message.into(),
    }
}
