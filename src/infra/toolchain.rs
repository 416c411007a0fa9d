//! Rust toolchain management
//!
//! Locates rustup and cargo on PATH, manages cross-compilation target
//! installation, and drives the wasm compile.

use std::path::{Path, PathBuf};

use crate::error::ToolchainError;
use crate::infra::process::run_command;

/// Rust toolchain wrapper
#[derive(Debug)]
pub struct RustToolchain {
    rustup: PathBuf,
    cargo: PathBuf,
}

impl RustToolchain {
    /// Locate rustup and cargo on PATH
    pub fn locate() -> Result<Self, ToolchainError> {
        let rustup = which::which("rustup").map_err(|_| ToolchainError::ToolNotFound {
            tool: "rustup".to_string(),
            suggestion: "Install rustup from https://rustup.rs/".to_string(),
        })?;
        let cargo = which::which("cargo").map_err(|_| ToolchainError::ToolNotFound {
            tool: "cargo".to_string(),
            suggestion: "Install Rust via https://rustup.rs/".to_string(),
        })?;
        Ok(Self { rustup, cargo })
    }

    /// Build from explicit binary paths
    pub fn new(rustup: PathBuf, cargo: PathBuf) -> Self {
        Self { rustup, cargo }
    }

    /// Targets rustup reports as installed
    pub fn installed_targets(&self, cwd: &Path) -> Result<Vec<String>, ToolchainError> {
        let output = run_command(&self.rustup, &["target", "list", "--installed"], cwd)?;
        Ok(output
            .stdout
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }

    /// Install `target` unless it is already present
    ///
    /// Returns whether an installation was performed.
    pub fn ensure_target(&self, target: &str, cwd: &Path) -> Result<bool, ToolchainError> {
        if self
            .installed_targets(cwd)?
            .iter()
            .any(|t| t == target)
        {
            tracing::debug!("Target {target} already installed");
            return Ok(false);
        }
        tracing::info!("Installing target {target}");
        run_command(&self.rustup, &["target", "add", target], cwd).map_err(|e| {
            ToolchainError::TargetInstall {
                target: target.to_string(),
                error: e.to_string(),
            }
        })?;
        Ok(true)
    }

    /// Compile the project in `cwd` for a cross-compilation target
    pub fn build_for_target(
        &self,
        cwd: &Path,
        target: &str,
        profile: &str,
        jobs: Option<usize>,
    ) -> Result<(), ToolchainError> {
        let mut args = vec!["build", "--target", target];
        if profile == "release" {
            args.push("--release");
        }
        let jobs_arg;
        if let Some(jobs) = jobs {
            jobs_arg = jobs.to_string();
            args.push("--jobs");
            args.push(&jobs_arg);
        }
        run_command(&self.cargo, &args, cwd)?;
        Ok(())
    }
}
