// ============================================================================
// vidreport-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Scan Configuration Structures and Constants
//
// Instances of ScanConfig are created by consumers of the library (like
// vidreport-cli) and handed to the Scanner to control traversal depth, the
// size of the probe worker pool, and which qualification policy is used.

use crate::error::{CoreError, CoreResult};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Default inclusive maximum depth, in path segments from the scan root.
pub const DEFAULT_MAX_DEPTH: usize = 2;

// ============================================================================
// QUALIFICATION POLICY
// ============================================================================

/// Which rule decides whether a file is a media entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// MIME type inferred from the extension starts with `video` or `audio`.
    #[default]
    Mime,

    /// Legacy fixed extension allow-list (mp4, mkv, avi, mov, mpg, mp3).
    Extensions,
}

// ============================================================================
// SCAN CONFIGURATION
// ============================================================================

/// Configuration for a single scan.
///
/// # Examples
///
/// ```rust
/// use vidreport_core::{MatchPolicy, ScanConfig};
///
/// let config = ScanConfig {
///     max_depth: 3,
///     jobs: 4,
///     match_policy: MatchPolicy::Mime,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Inclusive maximum depth of directories to include (root = 0)
    pub max_depth: usize,

    /// Number of probe workers; 1 probes sequentially on the calling thread
    pub jobs: usize,

    /// Qualification policy for media files
    pub match_policy: MatchPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            jobs: num_cpus::get().max(1),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with the given depth and defaults for the rest.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Checks that the configuration can drive a scan.
    pub fn validate(&self) -> CoreResult<()> {
        if self.jobs == 0 {
            return Err(CoreError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
