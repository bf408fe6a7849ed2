//! Full run integration tests.
//!
//! Tests for the orchestrator itself, using synthetic registered checks:
//! ordering, selection, aggregation, and panic containment.

use ext_preflight::engine::orchestrator::{CheckOrchestrator, RegisteredCheck};
use ext_preflight::{CheckCategory, CheckResult};
use std::path::PathBuf;

// Helper to create a check that always passes
fn passing_check(id: &str, category: CheckCategory) -> RegisteredCheck {
    let id_clone = id.to_string();
    RegisteredCheck {
        id: id.to_string(),
        name: format!("Test check {}", id),
        category,
        description: format!("Test check {}", id),
        check_fn: Box::new(move || CheckResult::Pass {
            message: format!("{} passed", id_clone),
            duration_ms: 1,
        }),
        dependencies: vec![],
    }
}

// Helper to create a check that always fails
fn failing_check(id: &str, category: CheckCategory) -> RegisteredCheck {
    let id_clone = id.to_string();
    RegisteredCheck {
        id: id.to_string(),
        name: format!("Test check {}", id),
        category,
        description: format!("Test check {}", id),
        check_fn: Box::new(move || CheckResult::Fail {
            message: format!("{} failed", id_clone),
            details: "Test failure".to_string(),
            duration_ms: 1,
        }),
        dependencies: vec![],
    }
}

// Helper to create a check that always warns
fn warning_check(id: &str, category: CheckCategory) -> RegisteredCheck {
    let id_clone = id.to_string();
    RegisteredCheck {
        id: id.to_string(),
        name: format!("Test check {}", id),
        category,
        description: format!("Test check {}", id),
        check_fn: Box::new(move || CheckResult::Warn {
            message: format!("{} warning", id_clone),
            details: "Test warning".to_string(),
            duration_ms: 1,
        }),
        dependencies: vec![],
    }
}

fn orchestrator_with(checks: Vec<RegisteredCheck>) -> CheckOrchestrator {
    let mut orch = CheckOrchestrator::new(PathBuf::from("/test"));
    orch.register_checks(checks);
    orch
}

#[test]
fn test_empty_orchestrator_produces_empty_report() {
    let orch = orchestrator_with(vec![]);
    let report = orch.run_all();
    assert!(report.checks.is_empty());
    assert_eq!(report.summary().total, 0);
    assert!(!report.has_failures());
}

#[test]
fn test_run_all_executes_every_check() {
    let orch = orchestrator_with(vec![
        passing_check("A-001", CheckCategory::Manifest),
        warning_check("A-002", CheckCategory::Manifest),
        failing_check("B-001", CheckCategory::Entry),
    ]);
    let report = orch.run_all();
    assert_eq!(report.checks.len(), 3);

    let summary = report.summary();
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.warned, 1);
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_failure_does_not_stop_later_checks() {
    let orch = orchestrator_with(vec![
        failing_check("A-001", CheckCategory::Manifest),
        passing_check("B-001", CheckCategory::Entry),
        passing_check("C-001", CheckCategory::Library),
    ]);
    let report = orch.run_all();
    // Full-scan policy: everything after the failure still executes
    assert_eq!(report.checks.len(), 3);
    assert_eq!(report.summary().passed, 2);
    assert!(report.has_failures());
}

#[test]
fn test_run_categories_filters() {
    let orch = orchestrator_with(vec![
        passing_check("A-001", CheckCategory::Manifest),
        passing_check("B-001", CheckCategory::Entry),
        passing_check("C-001", CheckCategory::Library),
    ]);
    let report = orch.run_categories(&[CheckCategory::Library]);
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.checks[0].id, "C-001");
}

#[test]
fn test_run_specific_and_excluding() {
    let orch = orchestrator_with(vec![
        passing_check("A-001", CheckCategory::Manifest),
        passing_check("A-002", CheckCategory::Manifest),
        passing_check("A-003", CheckCategory::Manifest),
    ]);

    let report = orch.run_specific(&["A-002".to_string()]);
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.checks[0].id, "A-002");

    let report = orch.run_excluding(&["A-002".to_string()]);
    assert_eq!(report.checks.len(), 2);
    assert!(report.checks.iter().all(|c| c.id != "A-002"));
}

#[test]
fn test_unknown_check_id_is_ignored() {
    let orch = orchestrator_with(vec![passing_check("A-001", CheckCategory::Manifest)]);
    let report = orch.run_specific(&["NOPE-999".to_string(), "A-001".to_string()]);
    assert_eq!(report.checks.len(), 1);
}

#[test]
fn test_dependencies_run_first() {
    let mut dependent = passing_check("A-002", CheckCategory::Manifest);
    dependent.dependencies = vec!["A-001".to_string()];

    let orch = orchestrator_with(vec![dependent, passing_check("A-001", CheckCategory::Manifest)]);
    let report = orch.run_all();
    assert_eq!(report.checks.len(), 2);
    assert_eq!(report.checks[0].id, "A-001");
    assert_eq!(report.checks[1].id, "A-002");
}

#[test]
fn test_panicking_check_becomes_failure() {
    let orch = orchestrator_with(vec![
        RegisteredCheck {
            id: "BOOM-001".to_string(),
            name: "Panicking check".to_string(),
            category: CheckCategory::Entry,
            description: "Always panics".to_string(),
            check_fn: Box::new(|| panic!("kaboom")),
            dependencies: vec![],
        },
        passing_check("A-001", CheckCategory::Manifest),
    ]);

    let report = orch.run_all();
    assert_eq!(report.checks.len(), 2);
    assert!(report.has_failures());
    // The run survived the panic and still executed the other check
    assert_eq!(report.summary().passed, 1);
}

#[test]
fn test_report_metadata_carries_project_root() {
    let orch = orchestrator_with(vec![passing_check("A-001", CheckCategory::Manifest)]);
    let report = orch.run_all();
    assert_eq!(report.project_root, "/test");
}
