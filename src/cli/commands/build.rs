//! Build command implementation
//!
//! Implements `tetanus build`: install the wasm target, compile the
//! crate, and post-process the binary with wasm-bindgen. Steps run
//! strictly in order and the first failure stops the pipeline.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use sha2::{Digest, Sha256};

use crate::cli::output::{create_spinner, is_json, print_detail, print_success};
use crate::core::manifest::Manifest;
use crate::core::pipeline::{execute_plan, BuildPlan, BuildStep, PlanOptions, StepRunner};
use crate::error::{BuildError, FilesystemError, TetanusError};
use crate::infra::bindgen::{count_generated_files, WasmBindgen};
use crate::infra::toolchain::RustToolchain;

/// Build options
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Build with the dev profile instead of release
    pub debug: bool,
    /// Override the bindings output directory
    pub out_dir: Option<PathBuf>,
    /// Skip the target installation step
    pub skip_install: bool,
    /// Number of parallel compile jobs
    pub jobs: Option<usize>,
}

/// Runs pipeline steps against the real toolchain
struct ToolchainRunner {
    project_dir: PathBuf,
    toolchain: RustToolchain,
    bindgen: WasmBindgen,
}

impl StepRunner for ToolchainRunner {
    fn run(&mut self, step: &BuildStep) -> Result<(), BuildError> {
        let spinner = create_spinner(&step.to_string());
        let result = match step {
            BuildStep::EnsureTarget { target } => self
                .toolchain
                .ensure_target(target, &self.project_dir)
                .map(|_| ())
                .map_err(|source| BuildError::StepFailed {
                    step: step.to_string(),
                    source,
                }),
            BuildStep::CompileWasm {
                target,
                profile,
                jobs,
            } => self
                .toolchain
                .build_for_target(&self.project_dir, target, profile, *jobs)
                .map_err(|source| BuildError::StepFailed {
                    step: step.to_string(),
                    source,
                }),
            BuildStep::GenerateBindings {
                artifact,
                out_dir,
                flavor,
            } => self
                .bindgen
                .generate(&self.project_dir, artifact, out_dir, *flavor),
        };
        spinner.finish_and_clear();
        result
    }
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let manifest = Manifest::load(project_dir).map_err(TetanusError::from)?;

    if !project_dir.join("Cargo.toml").exists() {
        bail!(TetanusError::Build(BuildError::NoCargoProject {
            path: project_dir.to_path_buf(),
        }));
    }

    tracing::info!("Building project: {}", manifest.project.name);

    let plan_options = PlanOptions {
        skip_install: options.skip_install,
        debug: options.debug,
        out_dir: options.out_dir,
        jobs: options.jobs,
    };
    let plan = BuildPlan::new(project_dir, &manifest, &plan_options);

    let mut runner = ToolchainRunner {
        project_dir: project_dir.to_path_buf(),
        toolchain: RustToolchain::locate().map_err(TetanusError::from)?,
        bindgen: WasmBindgen::locate().map_err(TetanusError::from)?,
    };
    execute_plan(&plan, &mut runner).map_err(TetanusError::from)?;

    // Artifact presence was checked before bindgen ran; read it for the summary
    let artifact_bytes = std::fs::read(plan.artifact()).map_err(|e| {
        TetanusError::Filesystem(FilesystemError::ReadFile {
            path: plan.artifact().to_path_buf(),
            error: e.to_string(),
        })
    })?;
    let digest = hex::encode(Sha256::digest(&artifact_bytes));
    let bindings = count_generated_files(plan.out_dir());

    if is_json() {
        let summary = serde_json::json!({
            "status": "success",
            "artifact": plan.artifact().display().to_string(),
            "artifact_bytes": artifact_bytes.len(),
            "sha256": digest,
            "out_dir": plan.out_dir().display().to_string(),
            "binding_files": bindings,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_success("Build complete!");
    print_detail(&format!(
        "Artifact: {} ({} bytes)",
        plan.artifact().display(),
        artifact_bytes.len()
    ));
    print_detail(&format!("SHA-256:  {digest}"));
    print_detail(&format!(
        "Bindings: {} files in {}",
        bindings,
        plan.out_dir().display()
    ));

    Ok(())
}
