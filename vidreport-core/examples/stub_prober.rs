// vidreport-core/examples/stub_prober.rs
//
// Scans a folder with a prober that estimates durations from file sizes
// instead of running ffprobe. Useful to preview a report layout quickly.
//
// Usage: cargo run -p vidreport-core --example stub_prober -- /path/to/videos

use std::path::{Path, PathBuf};

use vidreport_core::{
    CoreResult, MimeClassifier, Prober, ReportStyle, ScanConfig, Scanner, WorkerPool, render,
    scanner::file_size,
};

/// Assumes a constant bitrate of 8 Mbit/s.
struct BitrateEstimate;

impl Prober for BitrateEstimate {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        let bytes = file_size(path)?;
        Ok(bytes as f64 * 8.0 / 8_000_000.0)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let scanner = Scanner::new(
        Box::new(BitrateEstimate),
        Box::new(MimeClassifier),
        WorkerPool::new(ScanConfig::default().jobs),
    );
    let report = scanner.scan(&root, 2)?;
    print!("{}", render(&report, ReportStyle::Markdown));
    Ok(())
}
