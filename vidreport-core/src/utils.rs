//! Utility functions for formatting sizes and durations.
//!
//! These helpers are shared by both report styles so that plain text and
//! Markdown always show identical figures.

/// Converts a duration in seconds to minutes.
#[must_use]
pub fn seconds_to_minutes(seconds: f64) -> f64 {
    seconds / 60.0
}

/// Formats bytes with 1024-based units (bytes, KB, MB, GB).
///
/// Values below 1024 are printed as whole bytes; larger values use two
/// decimal places.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 < KB {
        format!("{bytes} bytes")
    } else if bytes_f64 < MB {
        format!("{:.2} KB", bytes_f64 / KB)
    } else if bytes_f64 < GB {
        format!("{:.2} MB", bytes_f64 / MB)
    } else {
        format!("{:.2} GB", bytes_f64 / GB)
    }
}

/// Formats a duration in minutes with two decimal places.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.2} minutes")
}

/// Returns the final path component as a display string.
pub(crate) fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_size() {
        // Bytes
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1), "1 bytes");
        assert_eq!(format_size(1023), "1023 bytes");

        // KB
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(2048), "2.00 KB");

        // MB
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(2_097_152), "2.00 MB");

        // GB
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_size(1024 * 1024 * 1024 * 3), "3.00 GB");
    }

    #[test]
    fn test_seconds_to_minutes() {
        assert_eq!(seconds_to_minutes(0.0), 0.0);
        assert_eq!(seconds_to_minutes(60.0), 1.0);
        assert_eq!(seconds_to_minutes(90.0), 1.5);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0.0), "0.00 minutes");
        assert_eq!(format_minutes(1.0), "1.00 minutes");
        assert_eq!(format_minutes(2.5), "2.50 minutes");
        assert_eq!(format_minutes(1.234), "1.23 minutes");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/b/video.mp4")), "video.mp4");
        assert_eq!(display_name(Path::new("clip.mkv")), "clip.mkv");
    }
}
