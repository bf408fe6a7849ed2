//! Check execution orchestrator.
//!
//! Manages check registration, dependency resolution, and sequential
//! execution.
//!
//! # Degradation rules
//!
//! - Check panics: caught via std::panic::catch_unwind, converted to Fail
//! - Invalid check ID: silently skipped in run_specific/run_excluding
//! - Empty check list: returns an empty report (not an error)
//!
//! There is no fail-fast mode: every selected check runs to completion so
//! a single run surfaces as many problems as possible. Execution is always
//! single-threaded; each external tool invocation blocks until it exits.

use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::{Check, CheckCategory, CheckResult, PreflightConfig};
use log::debug;
use std::path::PathBuf;
use std::time::Instant;

/// A registered check with its execution function
pub struct RegisteredCheck {
    pub id: String,
    pub name: String,
    pub category: CheckCategory,
    pub description: String,
    pub check_fn: Box<dyn Fn() -> CheckResult>,
    pub dependencies: Vec<String>,
}

/// Check orchestrator
pub struct CheckOrchestrator {
    project_root: PathBuf,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator for the given project root
    pub fn new(project_root: PathBuf) -> Self {
        CheckOrchestrator {
            project_root,
            checks: Vec::new(),
        }
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// Run all registered checks
    pub fn run_all(&self) -> ValidationReport {
        self.run_checks(&self.checks.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
    }

    /// Run checks in a specific category
    pub fn run_category(&self, category: CheckCategory) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| c.category == category)
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(&ids)
    }

    /// Run checks in multiple categories
    pub fn run_categories(&self, categories: &[CheckCategory]) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| categories.contains(&c.category))
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(&ids)
    }

    /// Run specific checks by ID
    pub fn run_specific(&self, check_ids: &[String]) -> ValidationReport {
        self.run_checks(check_ids)
    }

    /// Run all checks except specified IDs
    pub fn run_excluding(&self, skip_ids: &[String]) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| !skip_ids.contains(&c.id))
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(&ids)
    }

    /// Execute the specified checks sequentially
    fn run_checks(&self, check_ids: &[String]) -> ValidationReport {
        let start = Instant::now();
        let mut aggregator = ResultAggregator::new();

        let ordered_checks = self.resolve_dependencies(check_ids);

        for check_id in &ordered_checks {
            if let Some(check) = self.checks.iter().find(|c| &c.id == check_id) {
                let result = self.execute_check(check);
                debug!("{}: {}", check.id, result);

                aggregator.add_result(Check {
                    id: check.id.clone(),
                    name: check.name.clone(),
                    category: check.category.clone(),
                    description: check.description.clone(),
                    result: Some(result),
                });
            }
        }

        let total_duration_ms = start.elapsed().as_millis() as u64;
        aggregator.set_metadata(self.project_root.display().to_string(), total_duration_ms);
        aggregator.to_report()
    }

    /// Execute a single check, containing any panic
    fn execute_check(&self, check: &RegisteredCheck) -> CheckResult {
        let start = Instant::now();

        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| (check.check_fn)()));

        match result {
            Ok(check_result) => check_result,
            Err(_) => CheckResult::Fail {
                message: "Check panicked during execution".to_string(),
                details: "An unexpected error occurred".to_string(),
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }

    /// Resolve check dependencies and return ordered list
    fn resolve_dependencies(&self, check_ids: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        let mut visited = std::collections::HashSet::new();

        fn visit(
            id: &str,
            checks: &[RegisteredCheck],
            check_ids: &[String],
            visited: &mut std::collections::HashSet<String>,
            result: &mut Vec<String>,
        ) {
            if visited.contains(id) {
                return;
            }

            if let Some(check) = checks.iter().find(|c| c.id == id) {
                for dep in &check.dependencies {
                    if check_ids.contains(dep) {
                        visit(dep, checks, check_ids, visited, result);
                    }
                }
            }

            visited.insert(id.to_string());
            if check_ids.contains(&id.to_string()) {
                result.push(id.to_string());
            }
        }

        for id in check_ids {
            visit(id, &self.checks, check_ids, &mut visited, &mut result);
        }

        result
    }
}

/// Create all registered checks with their execution functions
pub fn create_all_checks(config: &PreflightConfig) -> Vec<RegisteredCheck> {
    use crate::checks::{entry, library, manifest};
    use crate::project::layout::LIBRARY_FILES;

    let layout = config.layout();
    let node = config.node_binary.clone();

    let mut checks = Vec::new();

    // Manifest checks
    {
        let layout = layout.clone();
        checks.push(RegisteredCheck {
            id: "MF-001".to_string(),
            name: "Manifest Parse".to_string(),
            category: CheckCategory::Manifest,
            description: "Verify package.json exists and is valid JSON".to_string(),
            check_fn: Box::new(move || manifest::run_mf001(&layout)),
            dependencies: vec![],
        });
    }

    {
        let layout = layout.clone();
        checks.push(RegisteredCheck {
            id: "MF-002".to_string(),
            name: "Contributed Commands".to_string(),
            category: CheckCategory::Manifest,
            description: "Report commands declared under contributes.commands".to_string(),
            check_fn: Box::new(move || manifest::run_mf002(&layout)),
            dependencies: vec!["MF-001".to_string()],
        });
    }

    {
        let layout = layout.clone();
        checks.push(RegisteredCheck {
            id: "MF-003".to_string(),
            name: "Activation Events".to_string(),
            category: CheckCategory::Manifest,
            description: "Report declared activationEvents".to_string(),
            check_fn: Box::new(move || manifest::run_mf003(&layout)),
            dependencies: vec!["MF-001".to_string()],
        });
    }

    // Entry check
    {
        let layout = layout.clone();
        let node = node.clone();
        checks.push(RegisteredCheck {
            id: "ENT-001".to_string(),
            name: "Entry Script Syntax".to_string(),
            category: CheckCategory::Entry,
            description: "Syntax-check extension.js with the target runtime".to_string(),
            check_fn: Box::new(move || entry::run_ent001(&layout, &node)),
            dependencies: vec![],
        });
    }

    // Library checks, one per fixed file
    for (i, file) in LIBRARY_FILES.iter().enumerate() {
        let layout = layout.clone();
        let node = node.clone();
        checks.push(RegisteredCheck {
            id: format!("LIB-{:03}", i + 1),
            name: format!("Library Script {}", file),
            category: CheckCategory::Library,
            description: format!("Syntax-check {} with the target runtime", file),
            check_fn: Box::new(move || library::run_lib(&layout, &node, i)),
            dependencies: vec![],
        });
    }

    checks
}
