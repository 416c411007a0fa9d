//! Manifest (tetanus.toml) parsing and validation
//!
//! The manifest describes the wasm build: which target to compile for,
//! which profile, where the generated bindings go, and which bindings
//! flavor to emit. Every field has a default matching the original
//! one-shot build script, so a minimal manifest only names the project.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::error::ManifestError;

/// The main project manifest (tetanus.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Project configuration
    pub project: ProjectConfig,

    /// Wasm build configuration
    #[serde(default)]
    pub wasm: WasmConfig,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project (crate) name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Project description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Wasm build configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WasmConfig {
    /// Cross-compilation target triple
    #[serde(default = "default_target")]
    pub target: String,

    /// Cargo profile (release or dev)
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Output directory for generated bindings
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// wasm-bindgen target flavor
    #[serde(default)]
    pub bindgen_target: BindgenTarget,
}

fn default_target() -> String {
    defaults::DEFAULT_WASM_TARGET.to_string()
}

fn default_profile() -> String {
    defaults::DEFAULT_PROFILE.to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_OUT_DIR)
}

impl Default for WasmConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            profile: default_profile(),
            out_dir: default_out_dir(),
            bindgen_target: BindgenTarget::default(),
        }
    }
}

/// Bindings flavor accepted by wasm-bindgen's `--target`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BindgenTarget {
    /// ES module for direct browser import
    #[default]
    Web,
    /// Bundler-oriented output (webpack and friends)
    Bundler,
    /// CommonJS for Node.js
    Nodejs,
    /// Classic script without modules
    NoModules,
    /// ES module for Deno
    Deno,
}

impl BindgenTarget {
    /// The flag value passed to wasm-bindgen
    pub fn as_flag(self) -> &'static str {
        match self {
            BindgenTarget::Web => "web",
            BindgenTarget::Bundler => "bundler",
            BindgenTarget::Nodejs => "nodejs",
            BindgenTarget::NoModules => "no-modules",
            BindgenTarget::Deno => "deno",
        }
    }
}

impl fmt::Display for BindgenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load the manifest from `<project_dir>/tetanus.toml`
    pub fn load(project_dir: &Path) -> Result<Self, ManifestError> {
        let path = project_dir.join(defaults::MANIFEST_FILE);
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ManifestError::NotFound { path: path.clone() })?;
        Self::from_toml(&content)
    }

    /// Validate manifest contents
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.project.name.is_empty() {
            return Err(ManifestError::Invalid {
                message: "project name is empty".to_string(),
            });
        }
        if self
            .project
            .name
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            return Err(ManifestError::Invalid {
                message: format!("project name '{}' is not a crate name", self.project.name),
            });
        }
        match self.wasm.profile.as_str() {
            "release" | "dev" => Ok(()),
            other => Err(ManifestError::Invalid {
                message: format!("unknown profile '{other}' (expected 'release' or 'dev')"),
            }),
        }
    }

    /// File name of the compiled wasm artifact
    ///
    /// Cargo maps hyphens in the crate name to underscores.
    pub fn artifact_name(&self) -> String {
        format!("{}.wasm", self.project.name.replace('-', "_"))
    }

    /// Directory cargo puts the artifact in for this target and profile
    ///
    /// The `dev` profile lands in `target/<triple>/debug`.
    pub fn artifact_dir(&self, project_dir: &Path) -> PathBuf {
        let profile_dir = match self.wasm.profile.as_str() {
            "dev" => "debug",
            other => other,
        };
        project_dir
            .join("target")
            .join(&self.wasm.target)
            .join(profile_dir)
    }

    /// Full path of the compiled wasm artifact
    pub fn artifact_path(&self, project_dir: &Path) -> PathBuf {
        self.artifact_dir(project_dir).join(self.artifact_name())
    }
}
