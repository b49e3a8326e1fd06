//! Recursive discovery of supported image files

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{CollageError, Result, invalid_parameter};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check whether a path carries one of the supported image extensions
///
/// The extension is whatever follows the last dot of the file name, so a
/// dot-file such as `.png` counts as a PNG.
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .and_then(|name| {
            name.rsplit_once('.')
                .map(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext))
        })
        .unwrap_or(false)
}

/// List every supported image under `root`, in traversal order
///
/// Symbolic links are not followed. Any traversal error aborts the scan.
///
/// # Errors
///
/// Returns an error if:
/// - `root` exists but is not a directory
/// - `root` or any directory beneath it cannot be read
pub fn discover_images(root: &Path) -> Result<Vec<PathBuf>> {
    if root.exists() && !root.is_dir() {
        return Err(invalid_parameter(
            "dir",
            &root.display(),
            &"input path is not a directory",
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| CollageError::Discovery {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_dir() && is_supported_image(entry.path()) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered images");
    Ok(files)
}
