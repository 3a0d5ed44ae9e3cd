//! `mn-project` — Project file model and save/load for the Macronade
//! native engine.
//!
//! This crate handles loading and saving animation project files in a
//! JSON format compatible with the Macronade desktop editor. It provides:
//!
//! - **Model**: `Project`, `Timeline`, `KeyframeSnapshot`, `SceneItem`,
//!   `Layer`, serde mirrors of the editor's camelCase wire format
//! - **Save/Load**: atomic file writes and validated loads
//! - **Migration**: version checking for files from other editor versions
//! - **Assets**: resolution of project-style asset paths onto disk
//!
//! # Usage
//!
//! ```rust,no_run
//! use mn_project::{load_project, save_project, Project, Timeline};
//! use std::path::Path;
//!
//! // Create a new project
//! let project = Project::new(Timeline::new(24, 0, 100));
//!
//! // Save to disk
//! save_project(&project, Path::new("scene.mcd")).unwrap();
//!
//! // Load from disk
//! let loaded = load_project(Path::new("scene.mcd")).unwrap();
//! assert_eq!(loaded.timeline.fps, 24);
//! ```

pub mod assets;
pub mod error;
pub mod load;
pub mod migrate;
pub mod save;
pub mod types;

// Re-export primary API at crate root
pub use assets::resolve_asset_path;
pub use error::{ProjectError, ProjectResult};
pub use load::{from_json_string, load_project};
pub use migrate::{migrate_project, CURRENT_VERSION};
pub use save::{save_project, to_json_string};
pub use types::{
    Attachment, BackgroundSize, KeyframeSnapshot, Layer, LayerStack, Project, SceneItem,
    SceneSnapshot, Timeline,
};
