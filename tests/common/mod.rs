//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway project directory for driving the binary against
pub struct TestProject {
    /// Temporary directory holding the project
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Path of the project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write a file into the project, creating parent directories
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Whether a file or directory exists in the project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample manifest TOML for testing
#[allow(dead_code)]
pub const SAMPLE_MANIFEST: &str = r#"
[project]
name = "test-project"
version = "1.0.0"
description = "A test project"

[wasm]
target = "wasm32-unknown-unknown"
profile = "release"
out_dir = "web"
bindgen_target = "web"
"#;

/// Minimal Cargo.toml so the project looks like a cargo crate
#[allow(dead_code)]
pub const SAMPLE_CARGO_TOML: &str = r#"
[package]
name = "test-project"
version = "1.0.0"
edition = "2021"
"#;

/// A directory of fake toolchain binaries, prepended to PATH
///
/// Each stub is a shell script, so stub-based tests are unix-only.
#[allow(dead_code)]
pub struct ToolStubs {
    dir: TempDir,
}

#[allow(dead_code)]
impl ToolStubs {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create stub directory"),
        }
    }

    /// Install an executable stub named `name` with the given script body
    #[cfg(unix)]
    pub fn install(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}")).expect("Failed to write stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");
    }

    /// PATH value with the stub directory first
    pub fn path_env(&self) -> String {
        let rest = std::env::var("PATH").unwrap_or_default();
        format!("{}:{rest}", self.dir.path().display())
    }
}

/// Run the tetanus binary in the project directory
#[allow(dead_code)]
pub fn run_tetanus(project: &TestProject, args: &[&str]) -> Output {
    run_tetanus_in(&project.path(), args)
}

/// Run the tetanus binary in an arbitrary directory
#[allow(dead_code)]
pub fn run_tetanus_in(dir: &std::path::Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tetanus"));
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute tetanus")
}

/// Run the tetanus binary with a stubbed toolchain on PATH
#[allow(dead_code)]
pub fn run_tetanus_with_stubs(project: &TestProject, stubs: &ToolStubs, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tetanus"));
    cmd.current_dir(project.path());
    cmd.env("PATH", stubs.path_env());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute tetanus")
}
