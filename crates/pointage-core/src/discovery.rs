use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PointageError;
use crate::extraction::has_extension;

/// List the documents under `root` whose extension is one of `extensions`.
///
/// With `recursive`, subdirectories are walked to any depth; unreadable
/// subdirectories and symlinked directories are skipped. The result is
/// sorted so repeated runs see the same order.
pub fn discover_documents(
    root: &Path,
    recursive: bool,
    extensions: &[&str],
) -> Result<Vec<PathBuf>, PointageError> {
    let mut found = Vec::new();
    let entries = std::fs::read_dir(root).map_err(|e| PointageError::Discovery {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    collect(entries, recursive, extensions, &mut found);
    found.sort();
    Ok(found)
}

fn collect(
    entries: std::fs::ReadDir,
    recursive: bool,
    extensions: &[&str],
    found: &mut Vec<PathBuf>,
) {
    for entry in entries.flatten() {
        let path = entry.path();
        // file_type() does not follow symlinks
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if !recursive {
                continue;
            }
            match std::fs::read_dir(&path) {
                Ok(sub) => collect(sub, recursive, extensions, found),
                Err(e) => warn!(dir = %path.display(), error = %e, "skipping unreadable directory"),
            }
        } else if file_type.is_symlink() && path.is_dir() {
            debug!(dir = %path.display(), "not following directory symlink");
        } else if path.is_file() && has_extension(&path, extensions) {
            found.push(path);
        }
    }
}
