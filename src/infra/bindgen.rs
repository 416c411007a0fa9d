//! wasm-bindgen invocation
//!
//! Runs the bindings generator over a compiled wasm binary and verifies
//! it actually produced something.

use std::path::{Path, PathBuf};

use crate::core::manifest::BindgenTarget;
use crate::error::{BuildError, ToolchainError};
use crate::infra::process::run_command;

/// wasm-bindgen CLI wrapper
#[derive(Debug)]
pub struct WasmBindgen {
    path: PathBuf,
}

impl WasmBindgen {
    /// Locate wasm-bindgen on PATH
    pub fn locate() -> Result<Self, ToolchainError> {
        let path = which::which("wasm-bindgen").map_err(|_| ToolchainError::ToolNotFound {
            tool: "wasm-bindgen".to_string(),
            suggestion: "Install with: cargo install wasm-bindgen-cli".to_string(),
        })?;
        Ok(Self { path })
    }

    /// Build from an explicit binary path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Generate bindings for `artifact` into `out_dir`
    ///
    /// Fails when the artifact is missing beforehand or when the output
    /// directory is empty afterwards.
    pub fn generate(
        &self,
        cwd: &Path,
        artifact: &Path,
        out_dir: &Path,
        flavor: BindgenTarget,
    ) -> Result<(), BuildError> {
        if !artifact.exists() {
            return Err(BuildError::ArtifactMissing {
                path: artifact.to_path_buf(),
            });
        }

        let artifact_str = artifact.display().to_string();
        let out_dir_str = out_dir.display().to_string();
        run_command(
            &self.path,
            &[
                artifact_str.as_str(),
                "--out-dir",
                out_dir_str.as_str(),
                "--target",
                flavor.as_flag(),
            ],
            cwd,
        )
        .map_err(|source| BuildError::StepFailed {
            step: "generate bindings".to_string(),
            source,
        })?;

        if count_generated_files(out_dir) == 0 {
            return Err(BuildError::EmptyOutputDir {
                path: out_dir.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Number of files present under the bindings output directory
pub fn count_generated_files(out_dir: &Path) -> usize {
    walkdir::WalkDir::new(out_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_fails_before_running_anything() {
        let dir = tempfile::TempDir::new().unwrap();
        // A bindgen path that would fail loudly if it were ever spawned
        let bindgen = WasmBindgen::new(PathBuf::from("/nonexistent/wasm-bindgen"));

        let err = bindgen
            .generate(
                dir.path(),
                &dir.path().join("missing.wasm"),
                &dir.path().join("web"),
                BindgenTarget::Web,
            )
            .unwrap_err();
        assert!(matches!(err, BuildError::ArtifactMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn empty_output_directory_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let artifact = dir.path().join("pkg.wasm");
        std::fs::write(&artifact, b"\0asm").unwrap();

        // Succeeds but produces nothing
        let fake = dir.path().join("wasm-bindgen");
        std::fs::write(&fake, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let bindgen = WasmBindgen::new(fake);
        let err = bindgen
            .generate(
                dir.path(),
                &artifact,
                &dir.path().join("web"),
                BindgenTarget::Web,
            )
            .unwrap_err();
        assert!(matches!(err, BuildError::EmptyOutputDir { .. }));
    }

    #[test]
    fn generated_file_count() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(count_generated_files(dir.path()), 0);

        std::fs::write(dir.path().join("a.js"), "x").unwrap();
        std::fs::create_dir(dir.path().join("snippets")).unwrap();
        std::fs::write(dir.path().join("snippets").join("b.js"), "y").unwrap();
        assert_eq!(count_generated_files(dir.path()), 2);
    }
}
