//! Library script syntax checks (LIB-001 through LIB-003).
//!
//! One check per fixed library script, in catalog order. A missing file
//! fails that file's check without invoking the runtime; because every
//! script is its own check, a failure in one never stops the others.

use crate::project::layout::{ProjectLayout, LIBRARY_FILES};
use crate::project::node::{check_syntax, SyntaxCheck};
use crate::{Check, CheckCategory, CheckResult};
use std::time::Instant;

/// Get all library checks
pub fn get_library_checks() -> Vec<Check> {
    LIBRARY_FILES
        .iter()
        .enumerate()
        .map(|(i, file)| Check {
            id: format!("LIB-{:03}", i + 1),
            name: format!("Library Script {}", file),
            category: CheckCategory::Library,
            description: format!("Syntax-check {} with the target runtime", file),
            result: None,
        })
        .collect()
}

/// Run LIB-001..003: syntax-check the library script at the given index
pub fn run_lib(layout: &ProjectLayout, node_binary: &str, index: usize) -> CheckResult {
    let start = Instant::now();

    let script = match layout.library_script(index) {
        Some(path) => path,
        None => {
            return CheckResult::Skip {
                reason: format!("no library script at index {}", index),
            }
        }
    };
    let rel = LIBRARY_FILES[index];

    if !script.exists() {
        return CheckResult::Fail {
            message: format!("{} is missing", rel),
            details: format!("expected at {}", script.display()),
            duration_ms: start.elapsed().as_millis() as u64,
        };
    }

    match check_syntax(node_binary, &script) {
        Ok(SyntaxCheck::Valid) => CheckResult::Pass {
            message: format!("{} is valid", rel),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Ok(SyntaxCheck::Invalid { diagnostics }) => CheckResult::Fail {
            message: format!("{} has syntax errors", rel),
            details: diagnostics,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => CheckResult::Fail {
            message: format!("could not run syntax check on {}", rel),
            details: e.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
    }
}
