//! Clean command implementation
//!
//! Removes the bindings output directory and the wasm target directory.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, print_detail, print_success};
use crate::core::clean::clean_project;
use crate::core::manifest::Manifest;
use crate::error::TetanusError;

/// Execute the clean command
///
/// A missing manifest is fine; defaults describe the standard layout.
pub async fn execute(project_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(project_dir).unwrap_or_else(|_| {
        Manifest::from_toml("[project]\nname = \"tetanus-attack\"\n")
            .expect("default manifest is valid")
    });

    let result = clean_project(project_dir, &manifest).map_err(TetanusError::from)?;

    if is_json() {
        let json = serde_json::json!({
            "removed": result.removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "skipped": result.skipped.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if result.removed.is_empty() {
        print_success("Nothing to clean");
    } else {
        print_success("Cleaned build artifacts");
        for dir in &result.removed {
            print_detail(&format!("removed {}", dir.display()));
        }
    }
    Ok(())
}
