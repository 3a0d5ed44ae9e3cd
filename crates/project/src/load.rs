//! Project deserialization — loading `Project` from JSON files.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ProjectError, ProjectResult};
use crate::migrate::migrate_project;
use crate::types::Project;

/// Deserialize a project from a JSON string.
///
/// Runs version migration before the typed pass, then validates the
/// timeline's structural requirements.
pub fn from_json_string(json: &str) -> ProjectResult<Project> {
    // First parse as generic Value to check/migrate version
    let mut value: serde_json::Value = serde_json::from_str(json)?;

    let version = migrate_project(&mut value)?;
    debug!(version, "Project version after migration");

    // Now deserialize the (possibly migrated) value into our typed struct
    let project: Project = serde_json::from_value(value)?;

    debug!(
        version = project.version,
        keyframe_count = project.timeline.keyframes.len(),
        "Deserialized project from JSON"
    );

    validate_project(&project)?;

    Ok(project)
}

/// Load a project from a file at the given path.
pub fn load_project(path: &Path) -> ProjectResult<Project> {
    if !path.exists() {
        return Err(ProjectError::NotFound {
            path: path.display().to_string(),
        });
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read project file");
        ProjectError::Io(e)
    })?;

    let project = from_json_string(&json)?;

    info!(
        path = %path.display(),
        fps = project.timeline.fps,
        keyframes = project.timeline.keyframes.len(),
        "Project loaded successfully"
    );

    Ok(project)
}

/// Validate basic structural requirements of a loaded project.
fn validate_project(project: &Project) -> ProjectResult<()> {
    let timeline = &project.timeline;

    if timeline.fps == 0 {
        return Err(ProjectError::InvalidProject {
            reason: "fps must be positive".into(),
        });
    }

    if timeline.start_frame > timeline.end_frame {
        return Err(ProjectError::InvalidProject {
            reason: format!(
                "startFrame {} is after endFrame {}",
                timeline.start_frame, timeline.end_frame
            ),
        });
    }

    // Validate that every listed keyframe has a stored state
    for &frame in &timeline.keyframes {
        if !timeline.keyframe_states.contains_key(&frame) {
            warn!(
                frame,
                "Keyframe has no stored state; resolving it will fail"
            );
            // This is a warning, not an error, so a damaged file can
            // still be opened and repaired in the editor
        }
    }

    Ok(())
}
