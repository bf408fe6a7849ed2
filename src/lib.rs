//! ext-preflight library
//!
//! Pre-packaging integrity validation for editor extension projects.
//!
//! The validator runs a fixed catalog of checks against an extension
//! project directory:
//! - Manifest checks: `package.json` parses, contributed commands and
//!   activation events are declared
//! - Entry script check: `extension.js` passes a syntax-only `node --check`
//! - Library checks: each script under `lib/` exists and passes the same
//!   syntax-only check
//!
//! # Example
//!
//! ```no_run
//! use ext_preflight::{run_preflight, PreflightConfig};
//!
//! let config = PreflightConfig::default();
//! let report = run_preflight(&config);
//! println!("Checks passed: {}", report.summary().passed);
//! ```

pub mod checks;
pub mod cli;
pub mod engine;
pub mod project;
pub mod version;

use cli::args::{Args, CategoryFilter};
use engine::orchestrator::{create_all_checks, CheckOrchestrator};
use engine::result::ValidationReport;
use project::layout::ProjectLayout;
use std::fmt;
use std::path::PathBuf;

pub use engine::result::{ResultSummary, ValidationReport as Report};

/// Check result indicating the outcome of a validation check.
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// Check passed successfully
    Pass {
        message: String,
        duration_ms: u64,
    },
    /// Check passed with warnings (advisory only, never fails the run)
    Warn {
        message: String,
        details: String,
        duration_ms: u64,
    },
    /// Check failed
    Fail {
        message: String,
        details: String,
        duration_ms: u64,
    },
    /// Check was skipped
    Skip {
        reason: String,
    },
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message, .. } => write!(f, "PASS: {}", message),
            CheckResult::Warn { message, details, .. } => {
                write!(f, "WARN: {} ({})", message, details)
            }
            CheckResult::Fail { message, details, .. } => {
                write!(f, "FAIL: {} ({})", message, details)
            }
            CheckResult::Skip { reason } => write!(f, "SKIP: {}", reason),
        }
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// Manifest structure checks (package.json)
    Manifest,
    /// Entry script syntax check (extension.js)
    Entry,
    /// Library script syntax checks (lib/*.js)
    Library,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Manifest => write!(f, "Manifest"),
            CheckCategory::Entry => write!(f, "Entry"),
            CheckCategory::Library => write!(f, "Library"),
        }
    }
}

/// A validation check with its result.
#[derive(Debug, Clone)]
pub struct Check {
    /// Unique identifier (e.g., "MF-001")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check category
    pub category: CheckCategory,
    /// Description of what this check validates
    pub description: String,
    /// Result of the check (None if not yet executed)
    pub result: Option<CheckResult>,
}

impl Default for Check {
    fn default() -> Self {
        Check {
            id: String::new(),
            name: String::new(),
            category: CheckCategory::Manifest,
            description: String::new(),
            result: None,
        }
    }
}

/// Error types for ext-preflight operations.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    /// File could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Manifest is not valid JSON
    #[error("manifest parse error in {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// External syntax checker could not be invoked
    #[error("failed to invoke '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for running validation checks.
#[derive(Debug, Clone)]
pub struct PreflightConfig {
    /// Project root containing the manifest and scripts
    pub root: PathBuf,
    /// Binary used for the syntax-only check (normally `node`)
    pub node_binary: String,
    /// Categories to run (None = all)
    pub categories: Option<Vec<CheckCategory>>,
    /// Specific checks to skip (by ID)
    pub skip_checks: Vec<String>,
    /// Specific checks to run (by ID)
    pub only_checks: Vec<String>,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        PreflightConfig {
            root: PathBuf::from("."),
            node_binary: "node".to_string(),
            categories: None,
            skip_checks: Vec::new(),
            only_checks: Vec::new(),
        }
    }
}

impl PreflightConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let categories = match args.category() {
            CategoryFilter::All => None,
            CategoryFilter::Manifest => Some(vec![CheckCategory::Manifest]),
            CategoryFilter::Entry => Some(vec![CheckCategory::Entry]),
            CategoryFilter::Library => Some(vec![CheckCategory::Library]),
        };

        PreflightConfig {
            root: args.root.clone(),
            node_binary: args.node.clone(),
            categories,
            skip_checks: args.skip.clone(),
            only_checks: args.only.clone(),
        }
    }

    /// The fixed file set implied by the project root
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.root)
    }
}

/// Run validation checks.
///
/// This is the main entry point. All selected checks are executed
/// sequentially and in full; a failing check never suppresses the checks
/// after it, so a single run reports every problem it can find.
///
/// # Example
///
/// ```no_run
/// use ext_preflight::{run_preflight, CheckCategory, PreflightConfig};
///
/// // Run only manifest checks
/// let config = PreflightConfig {
///     categories: Some(vec![CheckCategory::Manifest]),
///     ..Default::default()
/// };
///
/// let report = run_preflight(&config);
/// let summary = report.summary();
/// println!("Passed: {}, Failed: {}", summary.passed, summary.failed);
/// ```
pub fn run_preflight(config: &PreflightConfig) -> ValidationReport {
    let mut orchestrator = CheckOrchestrator::new(config.root.clone());
    orchestrator.register_checks(create_all_checks(config));

    if !config.only_checks.is_empty() {
        orchestrator.run_specific(&config.only_checks)
    } else if !config.skip_checks.is_empty() {
        orchestrator.run_excluding(&config.skip_checks)
    } else if let Some(ref categories) = config.categories {
        if categories.is_empty() {
            orchestrator.run_all()
        } else {
            orchestrator.run_categories(categories)
        }
    } else {
        orchestrator.run_all()
    }
}
