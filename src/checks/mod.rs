//! Validation check modules.
//!
//! Checks are organized by category:
//! - Manifest: `package.json` structure checks
//! - Entry: entry script syntax check
//! - Library: library script syntax checks
//!
//! # Degradation rules
//!
//! - Manifest unreadable or malformed: MF-001 fails, the advisory checks
//!   (MF-002, MF-003) return Skip
//! - Advisory field absent: Warn, never Fail
//! - Library file missing: Fail for that file, remaining files still run
//! - External tool not invocable: Fail with the invocation error text
//!
//! Checks never panic and never abort the run; every error condition is
//! folded into a CheckResult for the orchestrator to aggregate.

pub mod entry;
pub mod library;
pub mod manifest;

use crate::{Check, CheckCategory};

/// Get all registered checks
pub fn get_all_checks() -> Vec<Check> {
    let mut checks = Vec::new();
    checks.extend(manifest::get_manifest_checks());
    checks.extend(entry::get_entry_checks());
    checks.extend(library::get_library_checks());
    checks
}

/// Get checks for a specific category
pub fn get_checks_by_category(category: CheckCategory) -> Vec<Check> {
    match category {
        CheckCategory::Manifest => manifest::get_manifest_checks(),
        CheckCategory::Entry => entry::get_entry_checks(),
        CheckCategory::Library => library::get_library_checks(),
    }
}
