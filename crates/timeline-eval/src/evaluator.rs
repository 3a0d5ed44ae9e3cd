//! Core frame resolution: `snapshot_at_frame()` takes a timeline and a
//! frame number and produces the scene state to render.
//!
//! The resolution process:
//! 1. No authored states at all -> nothing to show (`None`).
//! 2. Exact authored frame -> the stored snapshot, borrowed as-is.
//! 3. Before the first / past the last keyframe -> clamp to the edge
//!    keyframe's snapshot.
//! 4. Between two keyframes -> blend them at the frame's ratio.
//!
//! A keyframe number with no stored state is reported as an error rather
//! than skipped; skipping would silently corrupt playback.

use std::borrow::Cow;

use mn_project::{KeyframeSnapshot, Timeline};

use crate::error::TimelineEvalError;
use crate::interp::interpolate_snapshot;

/// Resolve the scene state for an arbitrary frame.
///
/// Returns `Ok(None)` when the timeline has no authored states (a blank,
/// renderable condition). An exact authored frame comes back as
/// `Cow::Borrowed`, the stored snapshot itself, so callers must copy
/// before mutating; interpolated and clamped-edge frames are owned values
/// the caller is free to keep.
///
/// # Errors
/// [`TimelineEvalError::MissingKeyframeState`] when a keyframe number
/// involved in resolution has no stored state, and
/// [`TimelineEvalError::InvalidTimeline`] when states exist but the
/// keyframe number list is empty, leaving nothing to bracket with.
pub fn snapshot_at_frame(
    timeline: &Timeline,
    frame: i64,
) -> Result<Option<Cow<'_, KeyframeSnapshot>>, TimelineEvalError> {
    if timeline.keyframe_states.is_empty() {
        return Ok(None);
    }

    if let Some(snapshot) = timeline.keyframe_states.get(&frame) {
        return Ok(Some(Cow::Borrowed(snapshot)));
    }

    let keys = timeline.sorted_keyframes();
    if keys.is_empty() {
        return Err(TimelineEvalError::InvalidTimeline {
            reason: "keyframe states present but no keyframe numbers listed".into(),
        });
    }

    // Bracketing keys: greatest strictly below and smallest strictly above.
    let prev_frame = keys.iter().copied().filter(|&k| k < frame).next_back();
    let next_frame = keys.iter().copied().find(|&k| k > frame);

    let Some(prev_frame) = prev_frame else {
        // Before the first keyframe: hold its state.
        return Ok(Some(Cow::Borrowed(stored_state(timeline, keys[0])?)));
    };
    let Some(next_frame) = next_frame else {
        // Past the last keyframe: hold its state.
        return Ok(Some(Cow::Borrowed(stored_state(
            timeline,
            keys[keys.len() - 1],
        )?)));
    };

    let prev_snapshot = stored_state(timeline, prev_frame)?;
    let next_snapshot = stored_state(timeline, next_frame)?;

    // frame is strictly between the brackets, so the ratio is in (0, 1).
    let ratio = (frame - prev_frame) as f64 / (next_frame - prev_frame) as f64;

    Ok(Some(Cow::Owned(interpolate_snapshot(
        prev_snapshot,
        next_snapshot,
        ratio,
    ))))
}

/// Look up the stored state for a keyframe number, failing loudly when
/// the listed keyframe has no state.
fn stored_state(
    timeline: &Timeline,
    frame: i64,
) -> Result<&KeyframeSnapshot, TimelineEvalError> {
    timeline
        .keyframe_states
        .get(&frame)
        .ok_or(TimelineEvalError::MissingKeyframeState { frame })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_project::{Layer, LayerStack, SceneItem, SceneSnapshot};

    fn item_at(id: i64, x: f64, y: f64, scale: f64, rotation: f64) -> SceneItem {
        SceneItem {
            id,
            kind: "objet".into(),
            label: "Test".into(),
            asset_path: "/objets/wow.svg".into(),
            x,
            y,
            scale,
            rotation,
            width: 100.0,
            height: 60.0,
            variants: Default::default(),
            member_rotations: Default::default(),
            attachment: None,
        }
    }

    fn snapshot_with(items: Vec<SceneItem>) -> KeyframeSnapshot {
        KeyframeSnapshot {
            scene: SceneSnapshot {
                background_path: Some("/decors/defaut.png".into()),
                background_size: None,
                items,
            },
            layers: LayerStack {
                items: vec![Layer {
                    id: 1,
                    name: "Test".into(),
                    visible: true,
                    locked: false,
                    kind: "item".into(),
                }],
                active_layer_id: Some(1),
            },
        }
    }

    /// Keyframes at 0 and 10 animating one item, as the editor authors it.
    fn two_keyframe_timeline() -> Timeline {
        let mut tl = Timeline::new(24, 0, 10);
        tl.insert_keyframe(0, snapshot_with(vec![item_at(1, 10.0, 10.0, 1.0, 0.0)]));
        tl.insert_keyframe(10, snapshot_with(vec![item_at(1, 110.0, 210.0, 2.0, 90.0)]));
        tl
    }

    #[test]
    fn empty_timeline_resolves_to_none() {
        let tl = Timeline::new(24, 0, 100);
        assert!(snapshot_at_frame(&tl, 5).unwrap().is_none());
    }

    #[test]
    fn exact_frame_borrows_the_stored_snapshot() {
        let tl = two_keyframe_timeline();
        let resolved = snapshot_at_frame(&tl, 0).unwrap().expect("state");

        match resolved {
            Cow::Borrowed(snapshot) => {
                assert!(std::ptr::eq(snapshot, &tl.keyframe_states[&0]));
            }
            Cow::Owned(_) => panic!("exact frame must borrow, not copy"),
        }
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let tl = two_keyframe_timeline();
        let resolved = snapshot_at_frame(&tl, 5).unwrap().expect("state");

        let item = &resolved.scene.items[0];
        assert!((item.x - 60.0).abs() < 1e-9);
        assert!((item.y - 110.0).abs() < 1e-9);
        assert!((item.scale - 1.5).abs() < 1e-9);
        assert!((item.rotation - 45.0).abs() < 1e-9);
        assert!(matches!(resolved, Cow::Owned(_)));
    }

    #[test]
    fn every_in_between_frame_is_defined() {
        let tl = two_keyframe_timeline();
        for frame in -5..=15 {
            let resolved = snapshot_at_frame(&tl, frame).unwrap();
            assert!(resolved.is_some(), "frame {frame} resolved to nothing");
        }
    }

    #[test]
    fn frames_outside_the_range_clamp_to_edge_keyframes() {
        let tl = two_keyframe_timeline();

        let before = snapshot_at_frame(&tl, -3).unwrap().expect("state");
        assert!((before.scene.items[0].x - 10.0).abs() < 1e-9);

        let after = snapshot_at_frame(&tl, 42).unwrap().expect("state");
        assert!((after.scene.items[0].x - 110.0).abs() < 1e-9);
    }

    #[test]
    fn dangling_keyframe_reference_fails_loudly() {
        let mut tl = two_keyframe_timeline();
        tl.keyframe_states.remove(&10);

        // Bracketing through the missing state
        let err = snapshot_at_frame(&tl, 5).unwrap_err();
        assert_eq!(err, TimelineEvalError::MissingKeyframeState { frame: 10 });

        // Clamping onto it fails the same way
        let err = snapshot_at_frame(&tl, 10).unwrap_err();
        assert_eq!(err, TimelineEvalError::MissingKeyframeState { frame: 10 });
    }

    #[test]
    fn stored_state_without_keyframe_number_still_resolves_exactly() {
        let mut tl = two_keyframe_timeline();
        tl.keyframe_states.insert(7, snapshot_with(vec![]));

        // Exact hit works even though 7 is not in the keyframe list...
        let resolved = snapshot_at_frame(&tl, 7).unwrap().expect("state");
        assert!(resolved.scene.items.is_empty());

        // ...and interpolation still brackets with the listed keyframes.
        let resolved = snapshot_at_frame(&tl, 5).unwrap().expect("state");
        assert!((resolved.scene.items[0].x - 60.0).abs() < 1e-9);
    }

    #[test]
    fn states_without_any_keyframe_numbers_is_invalid() {
        let mut tl = Timeline::new(24, 0, 10);
        tl.keyframe_states.insert(5, snapshot_with(vec![]));

        // Exact hit still fine
        assert!(snapshot_at_frame(&tl, 5).unwrap().is_some());

        // Anything else has nothing to bracket with
        let err = snapshot_at_frame(&tl, 7).unwrap_err();
        assert!(matches!(err, TimelineEvalError::InvalidTimeline { .. }));
    }

    #[test]
    fn single_keyframe_holds_everywhere() {
        let mut tl = Timeline::new(24, 0, 100);
        tl.insert_keyframe(30, snapshot_with(vec![item_at(1, 5.0, 5.0, 1.0, 0.0)]));

        for frame in [0, 29, 30, 31, 100] {
            let resolved = snapshot_at_frame(&tl, frame).unwrap().expect("state");
            assert!((resolved.scene.items[0].x - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn appearing_item_pops_in_at_its_keyframe() {
        let mut tl = Timeline::new(24, 0, 10);
        tl.insert_keyframe(0, snapshot_with(vec![item_at(1, 0.0, 0.0, 1.0, 0.0)]));
        tl.insert_keyframe(
            10,
            snapshot_with(vec![
                item_at(1, 10.0, 0.0, 1.0, 0.0),
                item_at(2, 50.0, 50.0, 1.0, 0.0),
            ]),
        );

        // Absent at every interpolated frame...
        for frame in 1..10 {
            let resolved = snapshot_at_frame(&tl, frame).unwrap().expect("state");
            assert_eq!(resolved.scene.items.len(), 1, "frame {frame}");
        }

        // ...and present exactly at the authored frame.
        let at_key = snapshot_at_frame(&tl, 10).unwrap().expect("state");
        assert_eq!(at_key.scene.items.len(), 2);
    }

    #[test]
    fn disappearing_item_holds_until_its_last_keyframe() {
        let mut tl = Timeline::new(24, 0, 10);
        tl.insert_keyframe(
            0,
            snapshot_with(vec![
                item_at(1, 0.0, 0.0, 1.0, 0.0),
                item_at(2, 50.0, 50.0, 1.0, 0.0),
            ]),
        );
        tl.insert_keyframe(10, snapshot_with(vec![item_at(1, 10.0, 0.0, 1.0, 0.0)]));

        // Carried unchanged (not faded) at every interpolated frame...
        for frame in 1..10 {
            let resolved = snapshot_at_frame(&tl, frame).unwrap().expect("state");
            let gone = resolved.scene.items.iter().find(|i| i.id == 2).expect("carried");
            assert!((gone.x - 50.0).abs() < 1e-9, "frame {frame}");
            assert!((gone.scale - 1.0).abs() < 1e-9);
        }

        // ...and gone exactly at the later keyframe.
        let at_key = snapshot_at_frame(&tl, 10).unwrap().expect("state");
        assert_eq!(at_key.scene.items.len(), 1);
    }
}
