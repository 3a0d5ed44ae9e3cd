//! Error types for timeline evaluation.

use thiserror::Error;

/// Errors that can occur during timeline evaluation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimelineEvalError {
    /// A frame number listed in the timeline's keyframes has no stored
    /// state. Resolving through it fails rather than skipping, which
    /// would silently corrupt playback.
    #[error("No keyframe state stored for frame {frame}")]
    MissingKeyframeState { frame: i64 },

    /// The timeline's keyframe data is structurally unusable.
    #[error("Invalid timeline: {reason}")]
    InvalidTimeline { reason: String },
}
