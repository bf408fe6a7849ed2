//! Syntax-only checking through the external runtime.
//!
//! `node --check <file>` parses a script without executing it: exit status
//! zero means valid syntax, non-zero comes with diagnostics on stderr.
//! A spawn failure (binary not installed, not on PATH, permission denied)
//! is its own error so the caller can report it distinctly.

use crate::PreflightError;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Outcome of a syntax-only check on one script
#[derive(Debug, Clone)]
pub enum SyntaxCheck {
    /// The runtime parsed the file without complaint
    Valid,
    /// The runtime rejected the file; diagnostics captured verbatim
    Invalid { diagnostics: String },
}

/// Run a syntax-only check against a single script file.
///
/// Blocks until the child process exits; there is no timeout, a hung
/// runtime hangs the run.
pub fn check_syntax(node_binary: &str, script: &Path) -> Result<SyntaxCheck, PreflightError> {
    debug!("running {} --check {}", node_binary, script.display());

    let output = Command::new(node_binary)
        .arg("--check")
        .arg(script)
        .output()
        .map_err(|e| PreflightError::CommandSpawn {
            command: format!("{} --check {}", node_binary, script.display()),
            source: e,
        })?;

    if output.status.success() {
        debug!("{} is syntactically valid", script.display());
        Ok(SyntaxCheck::Valid)
    } else {
        let diagnostics = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(
            "{} failed syntax check (status {:?})",
            script.display(),
            output.status.code()
        );
        Ok(SyntaxCheck::Invalid { diagnostics })
    }
}
