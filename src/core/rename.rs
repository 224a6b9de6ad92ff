//! In-place rename without overwriting.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::TrackError;

/// Rename `path` to `new_name` inside the same folder.
///
/// - same name: no filesystem call, returns `path` unchanged
/// - `new_name` already exists: `NameCollision`, nothing is touched
pub fn rename_in_place(path: &Path, new_name: &str) -> Result<PathBuf, TrackError> {
    let current = path.file_name().and_then(|s| s.to_str());
    if current == Some(new_name) {
        return Ok(path.to_path_buf());
    }

    let target = match path.parent() {
        Some(dir) => dir.join(new_name),
        None => PathBuf::from(new_name),
    };

    // symlink_metadata so a dangling link still counts as "taken"
    if target.symlink_metadata().is_ok() {
        return Err(TrackError::NameCollision {
            target: new_name.to_string(),
        });
    }

    fs::rename(path, &target)?;
    Ok(target)
}
