//! Project data model types — editor-compatible JSON format.
//!
//! These types match the TypeScript project file written by the Macronade
//! editor, enabling cross-format compatibility between the native Rust
//! engine and the desktop shell. Field names serialize in camelCase;
//! optional collections are omitted when empty so a round trip through
//! the engine leaves hand-authored files untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::migrate::CURRENT_VERSION;

/// Top-level project file: format version plus the single timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project format version (currently `1`).
    pub version: u32,
    /// The animation timeline.
    pub timeline: Timeline,
}

impl Project {
    /// Create a project at the current format version.
    pub fn new(timeline: Timeline) -> Self {
        Self {
            version: CURRENT_VERSION,
            timeline,
        }
    }
}

/// Timeline state: frame range, playhead, and the authored keyframes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Playback rate in frames per second.
    pub fps: u32,
    /// First frame of the timeline.
    pub start_frame: i64,
    /// Last frame of the timeline.
    pub end_frame: i64,
    /// Playhead position. Expected within `[start_frame, end_frame]` but
    /// never clamped by the model; the shell owns playhead policy.
    pub current_frame: i64,
    /// Authored keyframe frame numbers. Storage order is whatever the
    /// editor wrote; evaluation treats this as a set.
    #[serde(default)]
    pub keyframes: Vec<i64>,
    /// Full scene state per authored keyframe, keyed by frame number.
    /// Keys serialize as decimal strings; the BTreeMap keeps writes
    /// sorted ascending regardless of authoring order.
    #[serde(default)]
    pub keyframe_states: BTreeMap<i64, KeyframeSnapshot>,
    /// Whether playback loops at the end of the range. Informational;
    /// not consulted by evaluation.
    #[serde(default = "default_loop_enabled")]
    pub loop_enabled: bool,
}

fn default_loop_enabled() -> bool {
    true
}

impl Timeline {
    /// Create an empty timeline over the given frame range, with the
    /// playhead parked on `start_frame`.
    pub fn new(fps: u32, start_frame: i64, end_frame: i64) -> Self {
        Self {
            fps,
            start_frame,
            end_frame,
            current_frame: start_frame,
            keyframes: Vec::new(),
            keyframe_states: BTreeMap::new(),
            loop_enabled: true,
        }
    }

    /// Author (or replace) a keyframe at `frame`, keeping `keyframes` and
    /// `keyframe_states` in exact correspondence.
    pub fn insert_keyframe(&mut self, frame: i64, snapshot: KeyframeSnapshot) {
        if !self.keyframes.contains(&frame) {
            self.keyframes.push(frame);
            self.keyframes.sort_unstable();
        }
        self.keyframe_states.insert(frame, snapshot);
    }

    /// Remove the keyframe at `frame`, returning its snapshot if one was
    /// authored there.
    pub fn remove_keyframe(&mut self, frame: i64) -> Option<KeyframeSnapshot> {
        self.keyframes.retain(|&k| k != frame);
        self.keyframe_states.remove(&frame)
    }

    /// Keyframe frame numbers deduplicated and sorted ascending: the key
    /// set evaluation brackets against.
    pub fn sorted_keyframes(&self) -> Vec<i64> {
        let mut keys = self.keyframes.clone();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// One authored instant: the full scene plus the layer stack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeSnapshot {
    /// Visual state of the scene at this keyframe.
    #[serde(default)]
    pub scene: SceneSnapshot,
    /// Layer stack at this keyframe.
    #[serde(default)]
    pub layers: LayerStack,
}

/// The `layers` block of a keyframe: ordered layers plus the selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStack {
    /// Layers in stacking order.
    #[serde(default)]
    pub items: Vec<Layer>,
    /// Id of the layer selected in the editor, if any. Expected to match
    /// a layer in `items`; not enforced by the model.
    pub active_layer_id: Option<i64>,
}

/// A named visibility/lock control over the scene. Layers carry no
/// geometry of their own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Identifier, unique within one keyframe.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether the layer is shown.
    pub visible: bool,
    /// Whether the layer is locked against editing.
    pub locked: bool,
    /// Free-form classification tag.
    pub kind: String,
}

/// Full visual state of the scene at one instant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    /// Background asset reference (`/decors/...` style), `null` when the
    /// scene has no background.
    pub background_path: Option<String>,
    /// Pixel size of the background asset, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<BackgroundSize>,
    /// Placed items in render order (index 0 paints first).
    #[serde(default)]
    pub items: Vec<SceneItem>,
}

/// Pixel dimensions of a background asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSize {
    pub width: u32,
    pub height: u32,
}

/// A single placed visual element on the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneItem {
    /// Identifier, unique within one scene snapshot.
    pub id: i64,
    /// Free-form classification tag (`"objet"`, `"pantin"`, ...).
    pub kind: String,
    /// Display label shown in the editor.
    pub label: String,
    /// Logical asset path, resolved by the renderer (see
    /// [`crate::assets::resolve_asset_path`]).
    pub asset_path: String,
    /// Position in scene units.
    pub x: f64,
    /// Position in scene units.
    pub y: f64,
    /// Uniform scale factor. Positive expected, not enforced.
    pub scale: f64,
    /// Rotation in degrees. Any real value; semantically mod 360.
    pub rotation: f64,
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
    /// Named variant choices (e.g. facial expression per slot).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, String>,
    /// Per-member rotation overrides in degrees, for jointed items.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub member_rotations: BTreeMap<String, f64>,
    /// When set, this item's position is relative to a pantin member
    /// rather than absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

/// Attachment of an item onto a member of a pantin.
///
/// A non-owning relation: the pantin is referenced by id and the member
/// by name, looked up by the rendering collaborator at paint time. The
/// engine never follows this reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Id of the pantin item this attachment targets.
    pub pantin_id: i64,
    /// Named member on that pantin (e.g. `"main_droite"`).
    pub member_id: String,
    /// Offset from the member anchor, in scene units.
    pub offset_x: f64,
    /// Offset from the member anchor, in scene units.
    pub offset_y: f64,
}
