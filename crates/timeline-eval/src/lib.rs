//! `mn-timeline-eval` — Timeline evaluation for the Macronade native
//! engine.
//!
//! This crate resolves a timeline at a given frame and produces the
//! [`KeyframeSnapshot`](mn_project::KeyframeSnapshot) for the renderer.
//! It handles:
//!
//! - **Frame resolution**: exact keyframe hits, edge clamping, and
//!   in-between blending
//! - **Interpolation**: linear position/scale and shortest-arc rotation
//! - **Navigation**: jumping to the previous/next authored keyframe
//!
//! Everything here is a pure function over a borrowed
//! [`Timeline`](mn_project::Timeline); nothing mutates the project,
//! performs I/O, or blocks.
//!
//! # Usage
//!
//! ```rust
//! use mn_project::Timeline;
//! use mn_timeline_eval::{jump_next_keyframe, snapshot_at_frame};
//!
//! let timeline = Timeline::new(24, 0, 100);
//! let snapshot = snapshot_at_frame(&timeline, 12).unwrap();
//! assert!(snapshot.is_none()); // nothing authored yet
//! assert_eq!(jump_next_keyframe(&timeline, 12), 12);
//! ```

pub mod error;
pub mod evaluator;
pub mod interp;
pub mod navigate;

// Re-export primary API
pub use error::TimelineEvalError;
pub use evaluator::snapshot_at_frame;
pub use interp::interpolate_snapshot;
pub use navigate::{jump_next_keyframe, jump_prev_keyframe};
