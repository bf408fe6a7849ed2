//! Manifest structure checks (MF-001 through MF-003).
//!
//! MF-001 is the only manifest check that can fail: the file must exist
//! and parse as JSON. MF-002 and MF-003 are advisories on conventionally
//! expected fields; their absence warns but never fails the run. When the
//! manifest itself is unreadable the advisories skip rather than pile on.

use crate::project::layout::ProjectLayout;
use crate::project::manifest::load_manifest;
use crate::{Check, CheckCategory, CheckResult};
use std::time::Instant;

/// Get all manifest checks
pub fn get_manifest_checks() -> Vec<Check> {
    vec![
        Check {
            id: "MF-001".to_string(),
            name: "Manifest Parse".to_string(),
            category: CheckCategory::Manifest,
            description: "Verify package.json exists and is valid JSON".to_string(),
            result: None,
        },
        Check {
            id: "MF-002".to_string(),
            name: "Contributed Commands".to_string(),
            category: CheckCategory::Manifest,
            description: "Report commands declared under contributes.commands".to_string(),
            result: None,
        },
        Check {
            id: "MF-003".to_string(),
            name: "Activation Events".to_string(),
            category: CheckCategory::Manifest,
            description: "Report declared activationEvents".to_string(),
            result: None,
        },
    ]
}

/// Run MF-001: Manifest Parse
pub fn run_mf001(layout: &ProjectLayout) -> CheckResult {
    let start = Instant::now();
    let path = layout.manifest();

    match load_manifest(&path) {
        Ok(_) => CheckResult::Pass {
            message: "package.json is valid JSON".to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => CheckResult::Fail {
            message: "package.json could not be parsed".to_string(),
            details: e.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
    }
}

/// Run MF-002: Contributed Commands
pub fn run_mf002(layout: &ProjectLayout) -> CheckResult {
    let start = Instant::now();

    let manifest = match load_manifest(&layout.manifest()) {
        Ok(m) => m,
        Err(e) => {
            return CheckResult::Skip {
                reason: format!("manifest unreadable: {}", e),
            }
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;

    match manifest.command_ids() {
        Some(ids) => CheckResult::Pass {
            message: format!("Commands found: {} ({})", ids.len(), ids.join(", ")),
            duration_ms,
        },
        None => CheckResult::Warn {
            message: "no commands contributed".to_string(),
            details: "package.json has no contributes.commands entries".to_string(),
            duration_ms,
        },
    }
}

/// Run MF-003: Activation Events
pub fn run_mf003(layout: &ProjectLayout) -> CheckResult {
    let start = Instant::now();

    let manifest = match load_manifest(&layout.manifest()) {
        Ok(m) => m,
        Err(e) => {
            return CheckResult::Skip {
                reason: format!("manifest unreadable: {}", e),
            }
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;

    match manifest.activation_events {
        Some(events) => CheckResult::Pass {
            message: format!("activationEvents: [{}]", events.join(", ")),
            duration_ms,
        },
        None => CheckResult::Warn {
            message: "no activationEvents declared".to_string(),
            details: "the host will not know when to activate the extension".to_string(),
            duration_ms,
        },
    }
}
