//! Entry script syntax check (ENT-001).
//!
//! Confirms `extension.js` parses under the target runtime without being
//! executed. A spawn failure has the same outcome as a syntax error but a
//! different message, so the two stay distinguishable in the report.

use crate::project::layout::ProjectLayout;
use crate::project::node::{check_syntax, SyntaxCheck};
use crate::{Check, CheckCategory, CheckResult};
use std::time::Instant;

/// Get all entry checks
pub fn get_entry_checks() -> Vec<Check> {
    vec![Check {
        id: "ENT-001".to_string(),
        name: "Entry Script Syntax".to_string(),
        category: CheckCategory::Entry,
        description: "Syntax-check extension.js with the target runtime".to_string(),
        result: None,
    }]
}

/// Run ENT-001: Entry Script Syntax
pub fn run_ent001(layout: &ProjectLayout, node_binary: &str) -> CheckResult {
    let start = Instant::now();
    let script = layout.entry_script();

    match check_syntax(node_binary, &script) {
        Ok(SyntaxCheck::Valid) => CheckResult::Pass {
            message: "extension.js syntax is valid".to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Ok(SyntaxCheck::Invalid { diagnostics }) => CheckResult::Fail {
            message: "extension.js has syntax errors".to_string(),
            details: diagnostics,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => CheckResult::Fail {
            message: "could not run syntax check on extension.js".to_string(),
            details: e.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
    }
}
