//! Import path discovery through a Python interpreter.

use crate::error::{PincheckError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Interpreter used when nothing else is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Prints `sys.path` as a JSON array.
const SYS_PATH_SCRIPT: &str = "import json, sys; print(json.dumps(sys.path))";

/// Run `python` and return its `sys.path`.
///
/// An empty entry (the current directory) is returned as `.`.
pub fn query_sys_path(python: &str) -> Result<Vec<PathBuf>> {
    let interpreter_error = |message: String| PincheckError::Interpreter {
        interpreter: python.to_string(),
        message,
    };

    tracing::debug!("Querying sys.path from {}", python);
    let output = Command::new(python)
        .args(["-c", SYS_PATH_SCRIPT])
        .output()
        .map_err(|e| interpreter_error(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(interpreter_error(format!(
            "exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_sys_path(&stdout).map_err(interpreter_error)
}

/// Parse the JSON printed by [`SYS_PATH_SCRIPT`].
pub fn parse_sys_path(stdout: &str) -> std::result::Result<Vec<PathBuf>, String> {
    let entries: Vec<String> = serde_json::from_str(stdout.trim())
        .map_err(|e| format!("unexpected sys.path output: {}", e))?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            if entry.is_empty() {
                PathBuf::from(".")
            } else {
                PathBuf::from(entry)
            }
        })
        .collect())
}
