//! Error types for tetanus
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest (tetanus.toml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest not found
    #[error("No tetanus.toml found at '{path}'. Create one to describe the wasm build.")]
    NotFound { path: PathBuf },

    /// Manifest parse error
    #[error("Failed to parse tetanus.toml: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// Invalid manifest contents
    #[error("Invalid manifest: {message}")]
    Invalid { message: String },
}

/// External toolchain errors
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// Required tool not found on PATH
    #[error("'{tool}' not found in PATH. {suggestion}")]
    ToolNotFound { tool: String, suggestion: String },

    /// External command exited with a failure status
    #[error("'{program}' failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Target installation failed
    #[error("Failed to install target '{target}': {error}")]
    TargetInstall { target: String, error: String },

    /// IO error while spawning a tool
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: String },
}

/// Build pipeline errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Compiled wasm artifact missing after the compile step
    #[error("Expected wasm artifact not found at '{path}'")]
    ArtifactMissing { path: PathBuf },

    /// Bindings output directory empty after generation
    #[error("Bindings output directory '{path}' is empty after generation")]
    EmptyOutputDir { path: PathBuf },

    /// Project layout problem
    #[error("Not a cargo project: no Cargo.toml in '{path}'")]
    NoCargoProject { path: PathBuf },

    /// A pipeline step failed
    #[error("Build step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        source: ToolchainError,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level tetanus error type
#[derive(Error, Debug)]
pub enum TetanusError {
    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Toolchain error
    #[error("Toolchain error: {0}")]
    Toolchain(#[from] ToolchainError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// IO error
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
