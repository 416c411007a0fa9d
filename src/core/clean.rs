//! Clean logic
//!
//! Removes the artifacts the build pipeline produces: the bindings
//! output directory and the wasm slice of cargo's target directory.
//! The host-target build cache is left alone.

use std::path::{Path, PathBuf};

use crate::core::manifest::Manifest;
use crate::error::FilesystemError;

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Directories that were removed
    pub removed: Vec<PathBuf>,
    /// Directories that didn't exist (skipped)
    pub skipped: Vec<PathBuf>,
}

/// Directories the pipeline writes for a given manifest
pub fn artifact_dirs(project_dir: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let out_dir = if manifest.wasm.out_dir.is_absolute() {
        manifest.wasm.out_dir.clone()
    } else {
        project_dir.join(&manifest.wasm.out_dir)
    };
    let wasm_target_dir = project_dir.join("target").join(&manifest.wasm.target);
    vec![out_dir, wasm_target_dir]
}

/// Remove the pipeline's artifacts
pub fn clean_project(
    project_dir: &Path,
    manifest: &Manifest,
) -> Result<CleanResult, FilesystemError> {
    let mut result = CleanResult::default();

    for dir in artifact_dirs(project_dir, manifest) {
        if dir.exists() {
            std::fs::remove_dir_all(&dir).map_err(|e| FilesystemError::RemoveDir {
                path: dir.clone(),
                error: e.to_string(),
            })?;
            result.removed.push(dir);
        } else {
            result.skipped.push(dir);
        }
    }

    Ok(result)
}

/// Whether any pipeline artifacts exist
pub fn has_artifacts(project_dir: &Path, manifest: &Manifest) -> bool {
    artifact_dirs(project_dir, manifest)
        .iter()
        .any(|dir| dir.exists())
}
