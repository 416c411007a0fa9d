//! Check command implementation
//!
//! Validates the manifest and project layout without building anything.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, print_detail, print_success};
use crate::core::manifest::Manifest;
use crate::error::{BuildError, TetanusError};

/// Execute the check command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(project_dir).map_err(TetanusError::from)?;

    if !project_dir.join("Cargo.toml").exists() {
        anyhow::bail!(TetanusError::Build(BuildError::NoCargoProject {
            path: project_dir.to_path_buf(),
        }));
    }

    if is_json() {
        let result = serde_json::json!({
            "status": "success",
            "project": manifest.project.name,
            "target": manifest.wasm.target,
            "profile": manifest.wasm.profile,
            "out_dir": manifest.wasm.out_dir.display().to_string(),
            "bindgen_target": manifest.wasm.bindgen_target.as_flag(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_success(&format!("Configuration valid: {}", manifest.project.name));
    print_detail(&format!("Target:   {}", manifest.wasm.target));
    print_detail(&format!("Profile:  {}", manifest.wasm.profile));
    print_detail(&format!("Out dir:  {}", manifest.wasm.out_dir.display()));
    print_detail(&format!("Bindings: {}", manifest.wasm.bindgen_target));
    Ok(())
}
