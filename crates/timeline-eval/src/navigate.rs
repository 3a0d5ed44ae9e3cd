//! Keyframe-relative navigation: jump to the previous or next authored
//! keyframe from an arbitrary frame.

use mn_project::Timeline;

/// Find the nearest authored keyframe strictly before `frame`.
///
/// Returns `frame` unchanged when no earlier keyframe exists (a no-op at
/// or before the first keyframe, or on an empty keyframe set).
pub fn jump_prev_keyframe(timeline: &Timeline, frame: i64) -> i64 {
    timeline
        .keyframes
        .iter()
        .copied()
        .filter(|&k| k < frame)
        .max()
        .unwrap_or(frame)
}

/// Find the nearest authored keyframe strictly after `frame`.
///
/// Returns `frame` unchanged when no later keyframe exists.
pub fn jump_next_keyframe(timeline: &Timeline, frame: i64) -> i64 {
    timeline
        .keyframes
        .iter()
        .copied()
        .filter(|&k| k > frame)
        .min()
        .unwrap_or(frame)
}
