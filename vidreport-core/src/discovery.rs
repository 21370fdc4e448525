//! Media classification for files found during a scan.
//!
//! A file qualifies as a report entry when the classifier maps its name to a
//! [`MediaKind`]. Two policies exist and are never combined:
//!
//! - [`MimeClassifier`] infers a MIME type from the extension and accepts
//!   anything under `video/` or `audio/`. This is the default.
//! - [`ExtensionClassifier`] accepts the legacy fixed allow-list only.

use crate::config::MatchPolicy;

/// Broad category of a qualifying media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

/// Decides whether a file name denotes a media file.
pub trait MediaClassifier: Send + Sync {
    /// Returns the media kind for `name`, or `None` if the file does not qualify.
    fn classify(&self, name: &str) -> Option<MediaKind>;
}

/// Extension-to-MIME lookup followed by a `video`/`audio` prefix test.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeClassifier;

impl MediaClassifier for MimeClassifier {
    fn classify(&self, name: &str) -> Option<MediaKind> {
        let mime = mime_type_for_name(name)?;
        if mime.starts_with("video") {
            Some(MediaKind::Video)
        } else if mime.starts_with("audio") {
            Some(MediaKind::Audio)
        } else {
            None
        }
    }
}

/// Extensions accepted by [`ExtensionClassifier`].
pub const LEGACY_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "mpg", "mp3"];

/// Fixed allow-list classifier (case-insensitive).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionClassifier;

impl MediaClassifier for ExtensionClassifier {
    fn classify(&self, name: &str) -> Option<MediaKind> {
        let ext = extension_of(name)?;
        LEGACY_EXTENSIONS
            .iter()
            .find(|allowed| ext.eq_ignore_ascii_case(allowed))
            .map(|allowed| {
                if *allowed == "mp3" {
                    MediaKind::Audio
                } else {
                    MediaKind::Video
                }
            })
    }
}

/// Returns the classifier implementing `policy`.
pub fn classifier_for(policy: MatchPolicy) -> Box<dyn MediaClassifier> {
    match policy {
        MatchPolicy::Mime => Box::new(MimeClassifier),
        MatchPolicy::Extensions => Box::new(ExtensionClassifier),
    }
}

fn extension_of(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    // Dotfiles such as ".mp4" have no extension.
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Guesses the MIME type of a file from its extension.
///
/// The lookup is a hand-maintained table built into this crate, not the
/// system MIME database. It covers the usual media types plus common
/// non-media types, so a `None` means the extension is unknown rather than
/// "not media". Ambiguous extensions resolve to their media meaning: `.ts`
/// is `video/mp2t` here, although some databases list it as a Qt
/// translation source.
#[must_use]
pub fn mime_type_for_name(name: &str) -> Option<&'static str> {
    let ext = extension_of(name)?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        // Video
        "mp4" | "m4v" | "mp4v" | "mpg4" => "video/mp4",
        "mkv" | "mk3d" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mov" | "qt" => "video/quicktime",
        "mpg" | "mpeg" | "mpe" | "m1v" | "m2v" => "video/mpeg",
        "wmv" => "video/x-ms-wmv",
        "asf" | "asx" => "video/x-ms-asf",
        "flv" => "video/x-flv",
        "f4v" => "video/x-f4v",
        "3gp" => "video/3gpp",
        "3g2" => "video/3gpp2",
        "ts" | "m2ts" | "mts" => "video/mp2t",
        "ogv" => "video/ogg",
        "vob" => "video/dvd",
        "dv" => "video/x-dv",
        "rm" | "rmvb" => "application/vnd.rn-realmedia",

        // Audio
        "mp3" => "audio/mpeg",
        "mp2" | "mpga" => "audio/mpeg",
        "m4a" | "m4b" => "audio/mp4",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "wav" => "audio/x-wav",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "wma" => "audio/x-ms-wma",
        "aif" | "aiff" | "aifc" => "audio/x-aiff",
        "mid" | "midi" | "kar" => "audio/midi",
        "amr" => "audio/amr",
        "ac3" => "audio/ac3",
        "mka" => "audio/x-matroska",
        "ra" => "audio/x-realaudio",
        "au" | "snd" => "audio/basic",
        "weba" => "audio/webm",

        // Images
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/vnd.microsoft.icon",
        "heic" => "image/heic",

        // Text and documents
        "txt" | "text" | "log" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "srt" => "application/x-subrip",
        "vtt" => "text/vtt",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "xml" => "application/xml",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "nfo" => "text/x-nfo",

        // Archives
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/vnd.rar",
        "iso" => "application/x-iso9660-image",

        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_classifier_video() {
        let classifier = MimeClassifier;
        for name in ["a.mp4", "b.MKV", "c.webm", "d.mov", "e.mpg", "f.avi", "g.ts"] {
            assert_eq!(
                classifier.classify(name),
                Some(MediaKind::Video),
                "'{name}' should be classified as video"
            );
        }
    }

    #[test]
    fn test_mime_classifier_audio() {
        let classifier = MimeClassifier;
        for name in ["song.mp3", "track.flac", "voice.m4a", "clip.Ogg", "x.opus"] {
            assert_eq!(
                classifier.classify(name),
                Some(MediaKind::Audio),
                "'{name}' should be classified as audio"
            );
        }
    }

    #[test]
    fn test_mime_classifier_rejects_non_media() {
        let classifier = MimeClassifier;
        for name in ["notes.txt", "cover.jpg", "subs.srt", "archive.zip", "README", ".mp4", "movie.rm", "weird.xyz"] {
            assert_eq!(classifier.classify(name), None, "'{name}' should not qualify");
        }
    }

    #[test]
    fn test_extension_classifier() {
        let classifier = ExtensionClassifier;
        assert_eq!(classifier.classify("a.mp4"), Some(MediaKind::Video));
        assert_eq!(classifier.classify("a.MOV"), Some(MediaKind::Video));
        assert_eq!(classifier.classify("a.mp3"), Some(MediaKind::Audio));

        // Only the fixed list qualifies, even for real media types
        assert_eq!(classifier.classify("a.webm"), None);
        assert_eq!(classifier.classify("a.flac"), None);
        assert_eq!(classifier.classify("a.txt"), None);
    }

    #[test]
    fn test_classifier_for_policy() {
        let mime = classifier_for(MatchPolicy::Mime);
        let legacy = classifier_for(MatchPolicy::Extensions);
        assert_eq!(mime.classify("a.webm"), Some(MediaKind::Video));
        assert_eq!(legacy.classify("a.webm"), None);
    }

    #[test]
    fn test_mime_type_for_name() {
        assert_eq!(mime_type_for_name("x.mp4"), Some("video/mp4"));
        assert_eq!(mime_type_for_name("x.tar.gz"), Some("application/gzip"));
        assert_eq!(mime_type_for_name("x.ts"), Some("video/mp2t"));
        assert_eq!(mime_type_for_name("x.TS"), Some("video/mp2t"));
        assert_eq!(mime_type_for_name("x"), None);
        assert_eq!(mime_type_for_name("x."), None);
    }
}
