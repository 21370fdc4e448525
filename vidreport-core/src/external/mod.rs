// ============================================================================
// vidreport-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Media Probing Backend
//
// The scanner never talks to ffprobe directly; it goes through the Prober
// trait so tests and alternative backends can supply durations without the
// external binary.

/// Contains the Prober trait and its ffprobe-backed implementation
pub mod ffprobe_executor;

pub use ffprobe_executor::{FfprobeProber, Prober};
