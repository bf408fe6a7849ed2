//! Result aggregation and reporting.
//!
//! Collects check results and generates report summaries.

use crate::{Check, CheckCategory, CheckResult};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Result summary statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSummary {
    pub passed: u32,
    pub warned: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total: u32,
    pub total_duration_ms: u64,
}

/// Validation report containing all check results
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub timestamp: u64,
    pub project_root: String,
    pub checks: Vec<Check>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        ValidationReport {
            timestamp: unix_timestamp(),
            project_root: String::new(),
            checks: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        summarize(&self.checks)
    }

    /// True if at least one check failed
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Result aggregator for collecting check results
pub struct ResultAggregator {
    checks: Vec<Check>,
    project_root: String,
    total_duration_ms: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new() -> Self {
        ResultAggregator {
            checks: Vec::new(),
            project_root: String::new(),
            total_duration_ms: 0,
        }
    }

    /// Set report metadata
    pub fn set_metadata(&mut self, project_root: String, total_duration_ms: u64) {
        self.project_root = project_root;
        self.total_duration_ms = total_duration_ms;
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Check if there are any failures
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
    }

    /// Get summary statistics
    pub fn get_summary(&self) -> ResultSummary {
        summarize(&self.checks)
    }

    /// Get checks by category
    pub fn get_by_category(&self, category: CheckCategory) -> Vec<&Check> {
        self.checks
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Get only failed checks
    pub fn get_failures(&self) -> Vec<&Check> {
        self.checks
            .iter()
            .filter(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
            .collect()
    }

    /// Get only warning checks
    pub fn get_warnings(&self) -> Vec<&Check> {
        self.checks
            .iter()
            .filter(|c| matches!(&c.result, Some(CheckResult::Warn { .. })))
            .collect()
    }

    /// Create final validation report
    pub fn to_report(&self) -> ValidationReport {
        ValidationReport {
            timestamp: unix_timestamp(),
            project_root: self.project_root.clone(),
            checks: self.checks.clone(),
            total_duration_ms: self.total_duration_ms,
        }
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(checks: &[Check]) -> ResultSummary {
    let mut summary = ResultSummary::default();

    for check in checks {
        summary.total += 1;

        match &check.result {
            Some(CheckResult::Pass { duration_ms, .. }) => {
                summary.passed += 1;
                summary.total_duration_ms += duration_ms;
            }
            Some(CheckResult::Warn { duration_ms, .. }) => {
                summary.warned += 1;
                summary.total_duration_ms += duration_ms;
            }
            Some(CheckResult::Fail { duration_ms, .. }) => {
                summary.failed += 1;
                summary.total_duration_ms += duration_ms;
            }
            Some(CheckResult::Skip { .. }) | None => {
                summary.skipped += 1;
            }
        }
    }

    summary
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
