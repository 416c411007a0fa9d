//! Doctor command logic
//!
//! Checks the external tools the build pipeline depends on and reports
//! issues with suggestions.

use std::path::Path;

use crate::config::defaults;
use crate::core::manifest::Manifest;

/// Result of a single dependency check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the dependency being checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Version if available
    pub version: Option<String>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// Whether this is a required or optional dependency
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, version: Option<String>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            version,
            error: None,
            suggestion: None,
            required,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            version: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
            required,
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Configuration issues found
    pub config_issues: Vec<String>,
}

impl DoctorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result
    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Add a configuration issue
    pub fn add_config_issue(&mut self, issue: String) {
        self.config_issues.push(issue);
    }

    /// Check if all checks passed (including optional)
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed) && self.config_issues.is_empty()
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get all failed required checks
    pub fn failed_required(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .collect()
    }
}

/// Check if a command is available in PATH and extract its version
pub fn check_command_available(command: &str) -> Option<String> {
    let path = which::which(command).ok()?;
    std::process::Command::new(path)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let combined = format!("{stdout}{stderr}");
                extract_version(&combined)
            } else {
                None
            }
        })
}

/// Extract version string from command output
fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:-\w+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check cargo availability
pub fn check_cargo() -> CheckResult {
    match check_command_available("cargo") {
        Some(version) => CheckResult::pass("cargo", Some(version), true),
        None => CheckResult::fail(
            "cargo",
            "cargo not found in PATH",
            Some("Install Rust via https://rustup.rs/"),
            true,
        ),
    }
}

/// Check rustup availability (needed to install the wasm target)
pub fn check_rustup() -> CheckResult {
    match check_command_available("rustup") {
        Some(version) => CheckResult::pass("rustup", Some(version), true),
        None => CheckResult::fail(
            "rustup",
            "rustup not found in PATH",
            Some("Install rustup from https://rustup.rs/ to manage the wasm target"),
            true,
        ),
    }
}

/// Check wasm-bindgen availability
pub fn check_wasm_bindgen() -> CheckResult {
    match check_command_available("wasm-bindgen") {
        Some(version) => CheckResult::pass("wasm-bindgen", Some(version), true),
        None => CheckResult::fail(
            "wasm-bindgen",
            "wasm-bindgen not found in PATH",
            Some("Install with: cargo install wasm-bindgen-cli"),
            true,
        ),
    }
}

/// Check wasm-opt availability (optional, shrinks binaries)
pub fn check_wasm_opt() -> CheckResult {
    match check_command_available("wasm-opt") {
        Some(version) => CheckResult::pass("wasm-opt (binaryen)", Some(version), false),
        None => CheckResult::fail(
            "wasm-opt (binaryen)",
            "wasm-opt not found in PATH",
            Some("Install binaryen for smaller wasm binaries (optional)"),
            false,
        ),
    }
}

/// Check if project configuration is valid
pub fn check_project_config(project_dir: &Path) -> Vec<String> {
    let mut issues = Vec::new();
    let manifest_path = project_dir.join(defaults::MANIFEST_FILE);

    if manifest_path.exists() {
        match std::fs::read_to_string(&manifest_path) {
            Ok(content) => {
                if let Err(e) = Manifest::from_toml(&content) {
                    issues.push(format!("Invalid {}: {e}", defaults::MANIFEST_FILE));
                }
            }
            Err(e) => {
                issues.push(format!("Cannot read {}: {e}", defaults::MANIFEST_FILE));
            }
        }
        if !project_dir.join("Cargo.toml").exists() {
            issues.push("tetanus.toml present but no Cargo.toml next to it".to_string());
        }
    }

    issues
}

/// Run all doctor checks
pub fn run_doctor(project_dir: Option<&Path>) -> DoctorReport {
    let mut report = DoctorReport::new();

    // Required pipeline tools
    report.add_check(check_cargo());
    report.add_check(check_rustup());
    report.add_check(check_wasm_bindgen());

    // Optional tools
    report.add_check(check_wasm_opt());

    // Check project configuration if in a project directory
    if let Some(dir) = project_dir {
        for issue in check_project_config(dir) {
            report.add_config_issue(issue);
        }
    }

    report
}
