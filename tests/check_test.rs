//! Integration tests for `tetanus check`
//!
//! Check validates the manifest and project layout without touching
//! the toolchain, so these tests need no stubs.

mod common;

use common::{run_tetanus, TestProject, SAMPLE_CARGO_TOML, SAMPLE_MANIFEST};

#[test]
fn test_check_accepts_valid_project() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", SAMPLE_MANIFEST);
    project.create_file("Cargo.toml", SAMPLE_CARGO_TOML);

    let output = run_tetanus(&project, &["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "check should succeed: stdout={stdout}, stderr={stderr}"
    );
    assert!(
        stdout.contains("Configuration valid"),
        "should confirm the configuration: {stdout}"
    );
    assert!(stdout.contains("test-project"), "should name the project: {stdout}");
}

#[test]
fn test_check_json_reports_effective_configuration() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", SAMPLE_MANIFEST);
    project.create_file("Cargo.toml", SAMPLE_CARGO_TOML);

    let output = run_tetanus(&project, &["--json", "check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "check --json should succeed: {stdout}");

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["status"], "success");
    assert_eq!(json["project"], "test-project");
    assert_eq!(json["target"], "wasm32-unknown-unknown");
    assert_eq!(json["profile"], "release");
    assert_eq!(json["out_dir"], "web");
    assert_eq!(json["bindgen_target"], "web");
}

#[test]
fn test_check_applies_defaults_to_minimal_manifest() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", "[project]\nname = \"minimal\"\n");
    project.create_file("Cargo.toml", SAMPLE_CARGO_TOML);

    let output = run_tetanus(&project, &["--json", "check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "minimal manifest should pass: {stdout}");

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["target"], "wasm32-unknown-unknown");
    assert_eq!(json["profile"], "release");
    assert_eq!(json["out_dir"], "web");
}

#[test]
fn test_check_fails_without_manifest() {
    let project = TestProject::new();

    let output = run_tetanus(&project, &["check"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "check should fail without a manifest");
    assert!(
        stderr.contains("tetanus.toml"),
        "error should mention the manifest file: {stderr}"
    );
    assert!(
        stderr.contains("Manifest error"),
        "error should be reported through the manifest domain: {stderr}"
    );
}

#[test]
fn test_check_fails_without_cargo_toml() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", SAMPLE_MANIFEST);

    let output = run_tetanus(&project, &["check"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "check should fail without Cargo.toml");
    assert!(
        stderr.contains("Cargo.toml") || stderr.contains("cargo project"),
        "error should mention the missing cargo project: {stderr}"
    );
}

#[test]
fn test_check_rejects_unknown_profile() {
    let project = TestProject::new();
    project.create_file(
        "tetanus.toml",
        "[project]\nname = \"x\"\n\n[wasm]\nprofile = \"fastest\"\n",
    );
    project.create_file("Cargo.toml", SAMPLE_CARGO_TOML);

    let output = run_tetanus(&project, &["check"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "unknown profile should fail validation");
    assert!(
        stderr.contains("profile"),
        "error should mention the profile: {stderr}"
    );
}
