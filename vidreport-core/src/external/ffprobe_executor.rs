//! FFprobe integration for reading media durations
//!
//! This module provides the [`Prober`] seam used by the scanner and its
//! default implementation backed by the `ffprobe` crate.
use crate::error::{CoreError, CoreResult, probe_error};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Measures the playback duration of a media file.
///
/// Implementations must be shareable across the probe worker pool.
pub trait Prober: Send + Sync {
    /// Returns the duration of `path` in seconds.
    fn probe_duration(&self, path: &Path) -> CoreResult<f64>;
}

/// [`Prober`] that runs the `ffprobe` binary via the `ffprobe` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfprobeProber;

impl FfprobeProber {
    pub fn new() -> Self {
        Self
    }
}

impl Prober for FfprobeProber {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        log::debug!("Running ffprobe (via crate) for duration on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => parse_duration(path, metadata.format.duration.as_deref()),
            Err(err) => Err(map_ffprobe_error(path, err)),
        }
    }
}

/// Parses the `format.duration` field reported by ffprobe.
fn parse_duration(path: &Path, raw: Option<&str>) -> CoreResult<f64> {
    let raw = raw.ok_or_else(|| probe_error(path, "ffprobe reported no duration"))?;
    let seconds = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| probe_error(path, format!("unparsable duration '{raw}': {e}")))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(probe_error(path, format!("invalid duration '{raw}'")));
    }
    Ok(seconds)
}

fn map_ffprobe_error(path: &Path, err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => probe_error(path, format!("failed to start ffprobe: {io_err}")),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            probe_error(
                path,
                format!("ffprobe exited with {}: {}", output.status, stderr.trim()),
            )
        }
        FfProbeError::Deserialize(err) => {
            probe_error(path, format!("ffprobe output deserialization: {err}"))
        }
        #[allow(unreachable_patterns)]
        other => probe_error(path, format!("unknown ffprobe error: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        let path = Path::new("clip.mp4");
        assert_eq!(parse_duration(path, Some("60.000000")).unwrap(), 60.0);
        assert_eq!(parse_duration(path, Some(" 1.5 ")).unwrap(), 1.5);
    }

    #[test]
    fn test_parse_duration_failures() {
        let path = Path::new("clip.mp4");
        assert!(matches!(parse_duration(path, None), Err(CoreError::Probe { .. })));
        assert!(matches!(parse_duration(path, Some("N/A")), Err(CoreError::Probe { .. })));
        assert!(matches!(parse_duration(path, Some("-3")), Err(CoreError::Probe { .. })));
    }

    #[test]
    fn test_probe_missing_file_fails() {
        // Fails whether or not ffprobe is installed
        let prober = FfprobeProber::new();
        let result = prober.probe_duration(Path::new("surely_this_does_not_exist_42.mp4"));
        assert!(matches!(result, Err(CoreError::Probe { .. })));
    }
}
