//! Asset path resolution — mapping project-style paths onto disk.
//!
//! Project files reference assets with public-style paths (`/objets/x.svg`)
//! rooted at an assets directory. The renderer calls this to locate the
//! actual file; the engine itself never reads asset contents.

use std::path::{Path, PathBuf};

/// Resolve a project-style asset path against the assets directory.
///
/// A leading `/` is stripped and the remainder joined under `assets_dir`.
/// Returns `None` (unresolved) when the input is absent or empty, or when
/// no file exists at the resolved location.
pub fn resolve_asset_path(assets_dir: &Path, public_path: Option<&str>) -> Option<PathBuf> {
    let public_path = public_path?;
    if public_path.is_empty() {
        return None;
    }

    let clean = public_path.strip_prefix('/').unwrap_or(public_path);
    let path = assets_dir.join(clean);
    path.exists().then_some(path)
}
