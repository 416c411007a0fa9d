//! External process invocation
//!
//! Thin wrapper over std::process that captures output and maps
//! non-zero exits to typed errors carrying a stderr tail.

use std::path::Path;
use std::process::Command;

use crate::error::ToolchainError;

/// How many trailing stderr lines to keep in error messages
const STDERR_TAIL_LINES: usize = 12;

/// Captured output of a successful command
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run a command in `cwd`, capturing output
///
/// A non-zero exit status is an error; the message carries the last few
/// stderr lines so toolchain failures stay readable.
pub fn run_command(
    program: &Path,
    args: &[&str],
    cwd: &Path,
) -> Result<CommandOutput, ToolchainError> {
    let program_name = program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());

    tracing::debug!("Running: {program_name} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| ToolchainError::Spawn {
            program: program_name.clone(),
            error: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(ToolchainError::CommandFailed {
            program: program_name,
            status: output
                .status
                .code()
                .map_or_else(|| "killed by signal".to_string(), |c| format!("exit {c}")),
            stderr: stderr_tail(&stderr),
        });
    }

    Ok(CommandOutput { stdout, stderr })
}

/// Last few non-empty lines of stderr, joined
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
