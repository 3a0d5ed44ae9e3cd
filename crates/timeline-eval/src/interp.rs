//! Snapshot interpolation between two authored keyframes.
//!
//! Position, scale, and rotation interpolate per item; rotation takes the
//! shortest circular path. Everything else (backgrounds, layers, variant
//! choices, member rotations, attachments) carries over from the earlier
//! keyframe unchanged, which is the authoring convention of the project
//! format.

use std::collections::HashMap;

use mn_project::{KeyframeSnapshot, SceneItem, SceneSnapshot};

/// Linear interpolation.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate angles in degrees along the shortest circular path.
///
/// The `+ 540` shift keeps the second `%` operating on a positive value,
/// so the remainder behaves like a euclidean mod and `delta` lands in
/// [-180, 180). Going from 350° to 10° passes through 360°, not 180°.
fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let delta = (((b - a) % 360.0) + 540.0) % 360.0 - 180.0;
    a + delta * t
}

/// Interpolate a scene item between two keyframes.
///
/// Only `x`, `y`, `scale`, and `rotation` animate; all other fields copy
/// from `base`.
fn interpolate_item(base: &SceneItem, other: &SceneItem, t: f64) -> SceneItem {
    SceneItem {
        x: lerp(base.x, other.x, t),
        y: lerp(base.y, other.y, t),
        scale: lerp(base.scale, other.scale, t),
        rotation: lerp_angle(base.rotation, other.rotation, t),
        ..base.clone()
    }
}

/// Compute an intermediate snapshot between two keyframes.
///
/// `t` is the position between `prev` (0.0) and `next` (1.0); values
/// outside that range extrapolate linearly. Items are matched by id:
/// a `prev` item with no counterpart in `next` carries through unchanged,
/// and items present only in `next` never appear — they pop in exactly at
/// the later keyframe. Item order is `prev`'s order. Background, layer
/// stack, and active layer come from `prev`.
pub fn interpolate_snapshot(
    prev: &KeyframeSnapshot,
    next: &KeyframeSnapshot,
    t: f64,
) -> KeyframeSnapshot {
    let next_items: HashMap<i64, &SceneItem> =
        next.scene.items.iter().map(|item| (item.id, item)).collect();

    let items = prev
        .scene
        .items
        .iter()
        .map(|item| match next_items.get(&item.id) {
            Some(other) => interpolate_item(item, other, t),
            None => item.clone(),
        })
        .collect();

    KeyframeSnapshot {
        scene: SceneSnapshot {
            background_path: prev.scene.background_path.clone(),
            background_size: prev.scene.background_size,
            items,
        },
        layers: prev.layers.clone(),
    }
}
