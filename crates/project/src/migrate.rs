//! Version migration — transforms older project JSON to the current format.
//!
//! The editor writes `version: 1` as its current format. Files that
//! predate the version field are treated as version 1 (the format has
//! never changed shape), and files from a newer editor are refused rather
//! than half-parsed.

use tracing::{debug, warn};

use crate::error::{ProjectError, ProjectResult};

/// Current project format version.
pub const CURRENT_VERSION: u32 = 1;

/// Migrate a project JSON value to the current version in-place.
///
/// Returns the version after migration. A missing `version` field is
/// stamped with the current version; newer versions are rejected with
/// [`ProjectError::UnsupportedVersion`].
pub fn migrate_project(value: &mut serde_json::Value) -> ProjectResult<u32> {
    let obj = value
        .as_object_mut()
        .ok_or_else(|| ProjectError::InvalidProject {
            reason: "project root must be a JSON object".into(),
        })?;

    let version = extract_version(obj)?;

    if version > CURRENT_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: version.to_string(),
        });
    }

    if version < CURRENT_VERSION {
        // The format has been version 1 since its first release; anything
        // lower has no defined migration path.
        return Err(ProjectError::MigrationFailed {
            from: version.to_string(),
            to: CURRENT_VERSION.to_string(),
            reason: format!("no migration path from version {version}"),
        });
    }

    // Stamp the version so typed deserialization sees it even when the
    // source file omitted the field.
    obj.insert(
        "version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    debug!(version, "Project is at current version");
    Ok(version)
}

/// Extract the version number from a project JSON object.
fn extract_version(obj: &serde_json::Map<String, serde_json::Value>) -> ProjectResult<u32> {
    match obj.get("version") {
        Some(serde_json::Value::Number(n)) => {
            n.as_u64()
                .map(|v| v as u32)
                .ok_or_else(|| ProjectError::InvalidProject {
                    reason: "version must be a non-negative integer".into(),
                })
        }
        Some(serde_json::Value::String(s)) => {
            s.parse::<u32>().map_err(|_| ProjectError::InvalidProject {
                reason: format!("cannot parse version string: {s}"),
            })
        }
        Some(_) => Err(ProjectError::InvalidProject {
            reason: "version field has unexpected type".into(),
        }),
        None => {
            warn!(
                assumed = CURRENT_VERSION,
                "Project has no version field, assuming current version"
            );
            Ok(CURRENT_VERSION)
        }
    }
}
