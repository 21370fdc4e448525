// ============================================================================
// vidreport-core/src/scanner.rs
// ============================================================================
//
// SCANNER: Depth-Bounded Directory Walk with Duration Aggregation
//
// Walks the tree below a root in pre-order, up to an inclusive maximum depth.
// For every visited directory the qualifying media files are probed as one
// batch through the configured executor, their sizes are read on the
// controlling thread, and the folder totals are computed once the batch has
// completed. Directories deeper than the bound are never entered.
//
// Per-file failures (probe, size lookup) and unreadable subdirectories are
// logged and degrade to zero values; only an invalid root aborts a scan.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::discovery::{MediaClassifier, classifier_for};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfprobeProber, Prober};
use crate::parallel::{ParallelExecutor, WorkerPool};
use crate::report::{DirectoryNode, Entry, Report};
use crate::utils::{display_name, seconds_to_minutes};

/// Walks media trees and builds [`Report`]s.
pub struct Scanner<E: ParallelExecutor = WorkerPool> {
    prober: Box<dyn Prober>,
    classifier: Box<dyn MediaClassifier>,
    executor: E,
}

/// Failure counters accumulated during one scan.
#[derive(Debug, Default)]
struct ScanStats {
    probe_failures: usize,
    stat_failures: usize,
}

/// Contents of one directory listing, split by kind and sorted by name.
#[derive(Debug, Default)]
struct Listing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl Scanner<WorkerPool> {
    /// Creates an ffprobe-backed scanner from `config`.
    pub fn from_config(config: &ScanConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::new(
            Box::new(FfprobeProber::new()),
            classifier_for(config.match_policy),
            WorkerPool::new(config.jobs),
        ))
    }
}

impl<E: ParallelExecutor> Scanner<E> {
    pub fn new(prober: Box<dyn Prober>, classifier: Box<dyn MediaClassifier>, executor: E) -> Self {
        Self {
            prober,
            classifier,
            executor,
        }
    }

    /// Scans `root` down to `max_depth` path segments (root = 0).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRoot`] if `root` is not a directory. No
    /// other failure is fatal.
    pub fn scan(&self, root: &Path, max_depth: usize) -> CoreResult<Report> {
        if !root.is_dir() {
            return Err(CoreError::InvalidRoot(root.to_path_buf()));
        }

        info!("Scanning {} (max depth {})", root.display(), max_depth);
        let mut stats = ScanStats::default();
        let tree = self.visit(root, PathBuf::new(), 0, max_depth, &mut stats);

        let mut report = Report::new(root.to_path_buf(), tree);
        report.probe_failures = stats.probe_failures;
        report.stat_failures = stats.stat_failures;

        info!(
            "Scan complete: {} file(s), {:.2} minutes, {} probe failure(s), {} size failure(s)",
            report.file_count, report.total_minutes, report.probe_failures, report.stat_failures
        );
        Ok(report)
    }

    fn visit(
        &self,
        dir: &Path,
        relative: PathBuf,
        depth: usize,
        max_depth: usize,
        stats: &mut ScanStats,
    ) -> DirectoryNode {
        let listing = list_directory(dir);

        let media: Vec<PathBuf> = listing
            .files
            .into_iter()
            .filter(|path| self.classifier.classify(&display_name(path)).is_some())
            .collect();
        debug!(
            "{}: {} media file(s), {} subdirector(ies)",
            dir.display(),
            media.len(),
            listing.dirs.len()
        );

        let entries = self.collect_entries(media, stats);

        let children = if depth < max_depth {
            listing
                .dirs
                .iter()
                .map(|child| {
                    let child_relative = relative.join(display_name(child));
                    self.visit(child, child_relative, depth + 1, max_depth, stats)
                })
                .collect()
        } else {
            Vec::new()
        };

        DirectoryNode::new(relative, depth, entries, children)
    }

    /// Probes a directory's media files as one batch, then reads their sizes.
    fn collect_entries(&self, media: Vec<PathBuf>, stats: &mut ScanStats) -> Vec<Entry> {
        let prober = self.prober.as_ref();
        let durations = self
            .executor
            .run_parallel(&media, |path| prober.probe_duration(path));

        media
            .into_iter()
            .zip(durations)
            .map(|(path, duration)| {
                let duration_minutes = match duration {
                    Ok(seconds) => seconds_to_minutes(seconds),
                    Err(e) => {
                        warn!("{e}");
                        stats.probe_failures += 1;
                        0.0
                    }
                };
                let size_bytes = match file_size(&path) {
                    Ok(size) => size,
                    Err(e) => {
                        warn!("{e}");
                        stats.stat_failures += 1;
                        0
                    }
                };
                Entry {
                    name: display_name(&path),
                    path,
                    duration_minutes,
                    size_bytes,
                }
            })
            .collect()
    }
}

/// Scans `root` with an ffprobe-backed scanner built from `config`.
pub fn scan(root: &Path, config: &ScanConfig) -> CoreResult<Report> {
    Scanner::from_config(config)?.scan(root, config.max_depth)
}

/// Returns the size of `path` in bytes, following symlinks.
pub fn file_size(path: &Path) -> CoreResult<u64> {
    fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|source| CoreError::Stat {
            path: path.to_path_buf(),
            source,
        })
}

/// Lists the immediate children of `dir`, sorted by file name.
///
/// Everything that is not a directory is a file candidate, including
/// symlinks whose target is missing; their size lookup fails later and is
/// counted as a stat failure. Symlinked directories are not entered.
/// Unreadable entries are logged and skipped.
fn list_directory(dir: &Path) -> Listing {
    let mut listing = Listing::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), CoreError::from(e));
                continue;
            }
        };
        let file_type = entry.file_type();
        if file_type.is_dir() {
            listing.dirs.push(entry.into_path());
        } else if file_type.is_symlink() && entry.path().is_dir() {
            debug!("Not following symlinked directory {}", entry.path().display());
        } else {
            listing.files.push(entry.into_path());
        }
    }
    listing
}
