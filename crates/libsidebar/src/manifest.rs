//! Locating the Cargo manifest for a documentation target.

use std::path::{Path, PathBuf};

use crate::error::{Result, SidebarError};

/// Find the `Cargo.toml` governing `target`.
///
/// A directory is searched first, then its ancestors. A `.rs` file starts the
/// search in its parent directory. A path to a manifest is returned as-is.
pub fn find_manifest(target: &Path) -> Result<PathBuf> {
    if target.is_dir() {
        nearest_manifest(target)
    } else if target.is_file() && target.file_name().is_some_and(|name| name == "Cargo.toml") {
        Ok(target.to_path_buf())
    } else if target.is_file() && target.extension().is_some_and(|ext| ext == "rs") {
        let parent = target.parent().ok_or(SidebarError::ManifestNotFound)?;
        nearest_manifest(parent)
    } else {
        Err(SidebarError::InvalidTargetPath(target.to_path_buf()))
    }
}

fn nearest_manifest(start_dir: &Path) -> Result<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join("Cargo.toml"))
        .find(|manifest| manifest.exists())
        .ok_or(SidebarError::ManifestNotFound)
}
