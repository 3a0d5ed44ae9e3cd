//! Project serialization — writing `Project` to JSON files.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ProjectError, ProjectResult};
use crate::types::Project;

/// Serialize a project to a pretty-printed JSON string.
///
/// Matches the editor's own output: two-space indent, keyframe state keys
/// sorted ascending.
pub fn to_json_string(project: &Project) -> ProjectResult<String> {
    let json = serde_json::to_string_pretty(project)?;
    debug!(
        version = project.version,
        json_len = json.len(),
        "Serialized project to JSON"
    );
    Ok(json)
}

/// Save a project to a file at the given path.
///
/// The file will be written atomically: data is first written to a
/// temporary file in the same directory, then renamed to the target path.
/// This prevents data loss if the process crashes or is interrupted
/// during write. A trailing newline is appended, as the editor writes it.
pub fn save_project(project: &Project, path: &Path) -> ProjectResult<()> {
    let mut json = to_json_string(project)?;
    json.push('\n');

    // Write to a temporary file first, then rename for atomic write.
    let temp_path = path.with_extension("mcd.tmp");

    std::fs::write(&temp_path, json.as_bytes()).map_err(|e| {
        tracing::error!(path = %temp_path.display(), error = %e, "Failed to write temp file");
        ProjectError::Io(e)
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        // If rename fails, try to clean up the temp file (best effort).
        let _ = std::fs::remove_file(&temp_path);
        tracing::error!(
            from = %temp_path.display(),
            to = %path.display(),
            error = %e,
            "Failed to rename temp file to target"
        );
        ProjectError::Io(e)
    })?;

    info!(
        path = %path.display(),
        keyframes = project.timeline.keyframes.len(),
        "Project saved successfully"
    );
    Ok(())
}
