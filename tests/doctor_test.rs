//! Integration tests for `tetanus doctor`
//!
//! Doctor probes the external tools the pipeline shells out to, so
//! the definitive assertions run against a stubbed PATH.

mod common;

use common::{run_tetanus, TestProject};

#[test]
fn test_doctor_json_lists_all_checks() {
    let project = TestProject::new();

    // May exit non-zero when tools are missing; the JSON report is
    // printed either way.
    let output = run_tetanus(&project, &["--json", "doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    let checks = json["checks"].as_array().expect("checks should be an array");
    let names: Vec<&str> = checks
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"cargo"));
    assert!(names.contains(&"rustup"));
    assert!(names.contains(&"wasm-bindgen"));
    assert!(names.contains(&"wasm-opt (binaryen)"));

    let status = json["status"].as_str().unwrap();
    assert!(matches!(status, "success" | "warning" | "error"));
    assert_eq!(json["total_count"].as_u64(), Some(4));
}

#[cfg(unix)]
mod stubbed {
    use super::*;
    use common::{run_tetanus_with_stubs, ToolStubs, SAMPLE_CARGO_TOML, SAMPLE_MANIFEST};

    /// Stubs for every tool doctor probes, each answering --version
    fn full_toolbox() -> ToolStubs {
        let stubs = ToolStubs::new();
        stubs.install("cargo", "echo 'cargo 1.82.0 (8f40fc59f 2024-08-21)'\n");
        stubs.install("rustup", "echo 'rustup 1.27.1 (54dd3d00f 2024-04-24)'\n");
        stubs.install("wasm-bindgen", "echo 'wasm-bindgen 0.2.95'\n");
        stubs.install("wasm-opt", "echo 'wasm-opt version 119'\n");
        stubs
    }

    #[test]
    fn test_doctor_passes_with_full_toolbox() {
        let project = TestProject::new();
        project.create_file("tetanus.toml", SAMPLE_MANIFEST);
        project.create_file("Cargo.toml", SAMPLE_CARGO_TOML);
        let stubs = full_toolbox();

        let output = run_tetanus_with_stubs(&project, &stubs, &["doctor"]);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(
            output.status.success(),
            "doctor should pass with all tools present: stdout={stdout}, stderr={stderr}"
        );
        assert!(stdout.contains("cargo"));
        assert!(stdout.contains("1.82.0"), "should report the cargo version: {stdout}");
    }

    #[test]
    fn test_doctor_json_reports_versions() {
        let project = TestProject::new();
        let stubs = full_toolbox();

        let output = run_tetanus_with_stubs(&project, &stubs, &["--json", "doctor"]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "doctor --json should succeed: {stdout}");

        let json: serde_json::Value =
            serde_json::from_str(&stdout).expect("stdout should be valid JSON");
        let cargo = json["checks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == "cargo")
            .expect("cargo check present");
        assert_eq!(cargo["passed"], true);
        assert_eq!(cargo["required"], true);
        assert_eq!(cargo["version"], "1.82.0");
    }

    #[test]
    fn test_doctor_fails_when_required_tool_is_missing() {
        let project = TestProject::new();
        let stubs = ToolStubs::new();
        stubs.install("cargo", "echo 'cargo 1.82.0'\n");
        stubs.install("rustup", "echo 'rustup 1.27.1'\n");
        // No wasm-bindgen stub; hide any real one by restricting PATH
        // to the stub directory alone.
        let output = {
            let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_tetanus"));
            cmd.current_dir(project.path());
            cmd.env(
                "PATH",
                stubs.path_env().split(':').next().unwrap().to_string(),
            );
            cmd.args(["--json", "doctor"]);
            cmd.output().expect("Failed to execute tetanus")
        };
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(
            !output.status.success(),
            "doctor should exit non-zero when a required tool is missing"
        );

        let json: serde_json::Value =
            serde_json::from_str(&stdout).expect("stdout should be valid JSON");
        assert_eq!(json["status"], "error");
        let bindgen = json["checks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == "wasm-bindgen")
            .expect("wasm-bindgen check present");
        assert_eq!(bindgen["passed"], false);
        assert!(bindgen["suggestion"]
            .as_str()
            .unwrap()
            .contains("wasm-bindgen-cli"));
    }

    #[test]
    fn test_doctor_flags_manifest_without_cargo_project() {
        let project = TestProject::new();
        project.create_file("tetanus.toml", SAMPLE_MANIFEST);
        let stubs = full_toolbox();

        let output = run_tetanus_with_stubs(&project, &stubs, &["--json", "doctor"]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        let json: serde_json::Value =
            serde_json::from_str(&stdout).expect("stdout should be valid JSON");
        let issues = json["config_issues"].as_array().unwrap();
        assert!(
            issues
                .iter()
                .any(|i| i.as_str().unwrap().contains("Cargo.toml")),
            "should flag the missing Cargo.toml: {stdout}"
        );
    }
}
