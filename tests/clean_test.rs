//! Integration tests for `tetanus clean`
//!
//! Clean removes the bindings output directory and the wasm slice of
//! cargo's target directory, leaving the host build cache alone.

mod common;

use assert_fs::prelude::*;
use common::{run_tetanus, run_tetanus_in, TestProject, SAMPLE_MANIFEST};
use predicates::prelude::*;

#[test]
fn test_clean_removes_pipeline_artifacts() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", SAMPLE_MANIFEST);
    project.create_file("web/test_project.js", "export {}");
    project.create_file(
        "target/wasm32-unknown-unknown/release/test_project.wasm",
        "wasm",
    );
    project.create_file("target/release/host-binary", "elf");

    let output = run_tetanus(&project, &["clean"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "clean should succeed: {stderr}");
    assert!(stdout.contains("Cleaned"), "should report the removal: {stdout}");
    assert!(!project.file_exists("web"), "bindings directory should be removed");
    assert!(
        !project.file_exists("target/wasm32-unknown-unknown"),
        "wasm target directory should be removed"
    );
    assert!(
        project.file_exists("target/release/host-binary"),
        "host build cache must survive clean"
    );
}

#[test]
fn test_clean_is_a_noop_on_a_fresh_project() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", SAMPLE_MANIFEST);

    let output = run_tetanus(&project, &["clean"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "clean with nothing to do should succeed");
    assert!(
        stdout.contains("Nothing to clean"),
        "should report there was nothing to remove: {stdout}"
    );
}

#[test]
fn test_clean_works_without_a_manifest() {
    // Defaults describe the standard layout, so a missing manifest is fine
    let project = TestProject::new();
    project.create_file("web/pkg.js", "x");

    let output = run_tetanus(&project, &["clean"]);

    assert!(output.status.success(), "clean should not require a manifest");
    assert!(!project.file_exists("web"), "default out dir should be removed");
}

#[test]
fn test_clean_respects_custom_out_dir() {
    let project = TestProject::new();
    project.create_file(
        "tetanus.toml",
        "[project]\nname = \"x\"\n\n[wasm]\nout_dir = \"dist\"\n",
    );
    project.create_file("dist/pkg.js", "x");
    project.create_file("web/unrelated.txt", "keep");

    let output = run_tetanus(&project, &["clean"]);

    assert!(output.status.success());
    assert!(!project.file_exists("dist"), "configured out dir should be removed");
    assert!(
        project.file_exists("web/unrelated.txt"),
        "directories outside the configured layout are untouched"
    );
}

#[test]
fn test_clean_leaves_project_sources_alone() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    temp.child("tetanus.toml").write_str(SAMPLE_MANIFEST).unwrap();
    temp.child("src/lib.rs").write_str("// code").unwrap();
    temp.child("web/pkg.js").write_str("x").unwrap();

    let output = run_tetanus_in(temp.path(), &["clean"]);

    assert!(output.status.success());
    temp.child("web").assert(predicate::path::missing());
    temp.child("src/lib.rs").assert(predicate::path::exists());
    temp.child("tetanus.toml").assert(predicate::path::exists());
}

#[test]
fn test_clean_json_lists_removed_directories() {
    let project = TestProject::new();
    project.create_file("tetanus.toml", SAMPLE_MANIFEST);
    project.create_file("web/pkg.js", "x");

    let output = run_tetanus(&project, &["--json", "clean"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "clean --json should succeed: {stdout}");

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let removed = json["removed"].as_array().expect("removed should be an array");
    assert_eq!(removed.len(), 1);
    assert!(removed[0].as_str().unwrap().ends_with("web"));
    assert_eq!(json["skipped"].as_array().unwrap().len(), 1);
}
