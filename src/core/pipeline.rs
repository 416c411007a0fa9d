//! Wasm build pipeline
//!
//! The pipeline is the crate's rendering of the original build script:
//! install the cross-compilation target, compile to wasm, run the
//! bindings generator. The plan is pure data; execution goes through a
//! [`StepRunner`] so the step sequencing and fail-fast policy can be
//! tested without invoking real tools.

use std::fmt;
use std::path::PathBuf;

use crate::core::manifest::{BindgenTarget, Manifest};
use crate::error::BuildError;

/// One step of the build pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    /// Ensure the cross-compilation target is installed
    EnsureTarget { target: String },

    /// Compile the crate to wasm
    CompileWasm {
        target: String,
        profile: String,
        jobs: Option<usize>,
    },

    /// Run the bindings generator over the compiled artifact
    GenerateBindings {
        artifact: PathBuf,
        out_dir: PathBuf,
        flavor: BindgenTarget,
    },
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::EnsureTarget { target } => write!(f, "install target {target}"),
            BuildStep::CompileWasm {
                target, profile, ..
            } => write!(f, "compile for {target} ({profile})"),
            BuildStep::GenerateBindings { out_dir, flavor, .. } => {
                write!(f, "generate {flavor} bindings into {}", out_dir.display())
            }
        }
    }
}

/// Options that adjust the plan beyond the manifest
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Skip the target installation step
    pub skip_install: bool,
    /// Override the manifest profile with `dev`
    pub debug: bool,
    /// Override the bindings output directory
    pub out_dir: Option<PathBuf>,
    /// Number of parallel compile jobs
    pub jobs: Option<usize>,
}

/// An ordered build plan
#[derive(Debug, Clone)]
pub struct BuildPlan {
    steps: Vec<BuildStep>,
    artifact: PathBuf,
    out_dir: PathBuf,
}

impl BuildPlan {
    /// Derive the plan from a manifest and CLI options
    pub fn new(project_dir: &std::path::Path, manifest: &Manifest, options: &PlanOptions) -> Self {
        let mut effective = manifest.clone();
        if options.debug {
            effective.wasm.profile = "dev".to_string();
        }
        if let Some(ref out_dir) = options.out_dir {
            effective.wasm.out_dir = out_dir.clone();
        }

        let artifact = effective.artifact_path(project_dir);
        let out_dir = if effective.wasm.out_dir.is_absolute() {
            effective.wasm.out_dir.clone()
        } else {
            project_dir.join(&effective.wasm.out_dir)
        };

        let mut steps = Vec::with_capacity(3);
        if !options.skip_install {
            steps.push(BuildStep::EnsureTarget {
                target: effective.wasm.target.clone(),
            });
        }
        steps.push(BuildStep::CompileWasm {
            target: effective.wasm.target.clone(),
            profile: effective.wasm.profile.clone(),
            jobs: options.jobs,
        });
        steps.push(BuildStep::GenerateBindings {
            artifact: artifact.clone(),
            out_dir: out_dir.clone(),
            flavor: effective.wasm.bindgen_target,
        });

        Self {
            steps,
            artifact,
            out_dir,
        }
    }

    /// The ordered steps
    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    /// Path of the compiled wasm artifact
    pub fn artifact(&self) -> &std::path::Path {
        &self.artifact
    }

    /// Resolved bindings output directory
    pub fn out_dir(&self) -> &std::path::Path {
        &self.out_dir
    }
}

/// Executes individual build steps
pub trait StepRunner {
    /// Run one step to completion
    fn run(&mut self, step: &BuildStep) -> Result<(), BuildError>;
}

/// Run every step in order, stopping at the first failure
///
/// Later steps are never attempted once a step fails. Returns the number
/// of steps that ran.
pub fn execute_plan(plan: &BuildPlan, runner: &mut dyn StepRunner) -> Result<usize, BuildError> {
    for (i, step) in plan.steps().iter().enumerate() {
        tracing::info!("Step {}/{}: {step}", i + 1, plan.steps().len());
        runner.run(step)?;
    }
    Ok(plan.steps().len())
}
