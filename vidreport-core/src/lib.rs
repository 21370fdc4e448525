//! Core library for reporting the playback duration of media trees.
//!
//! This crate walks a directory tree to a bounded depth, classifies media
//! files, measures their duration with ffprobe and their size on disk, and
//! renders the resulting report as plain text or Markdown.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidreport_core::{ReportStyle, ScanConfig, render, scan};
//! use std::path::Path;
//!
//! let config = ScanConfig::with_depth(2);
//! let report = scan(Path::new("/path/to/videos"), &config).unwrap();
//! print!("{}", render(&report, ReportStyle::Plain));
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod formatting;
pub mod parallel;
pub mod report;
pub mod scanner;
pub mod utils;

// Re-exports for public API
pub use config::{DEFAULT_MAX_DEPTH, MatchPolicy, ScanConfig};
pub use discovery::{ExtensionClassifier, MediaClassifier, MediaKind, MimeClassifier};
pub use error::{CoreError, CoreResult};
pub use external::{FfprobeProber, Prober};
pub use formatting::{ReportStyle, markdown_from_plain, render, render_plain};
pub use parallel::{ParallelExecutor, SequentialExecutor, ThreadPoolExecutor, WorkerPool};
pub use report::{DirectoryNode, Entry, Report};
pub use scanner::{Scanner, scan};
pub use utils::{format_minutes, format_size, seconds_to_minutes};
