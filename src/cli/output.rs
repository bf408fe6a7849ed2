//! Output formatting for ext-preflight.
//!
//! Terminal output for humans, JSON for CI. Both formatters accept any
//! report, including an empty one, and never panic.

use crate::cli::args::OutputFormat;
use crate::engine::result::ValidationReport;
use crate::{CheckCategory, CheckResult};
use colored::Colorize;
use serde_json::json;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Get the formatter for the selected output format
pub fn get_formatter(
    format: OutputFormat,
    no_color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn paint(&self, text: &str, painted: colored::ColoredString) -> String {
        if self.color {
            painted.to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str("ext-preflight validation report\n");
        output.push_str(&format!("Project: {}\n", report.project_root));
        output.push_str(&"-".repeat(72));
        output.push_str("\n\n");

        let categories = [
            ("MANIFEST CHECKS", CheckCategory::Manifest),
            ("ENTRY SCRIPT CHECKS", CheckCategory::Entry),
            ("LIBRARY CHECKS", CheckCategory::Library),
        ];

        for (header, category) in &categories {
            let category_checks: Vec<_> = report
                .checks
                .iter()
                .filter(|c| &c.category == category)
                .collect();

            if category_checks.is_empty() {
                continue;
            }

            if self.quiet {
                let has_issues = category_checks.iter().any(|c| {
                    matches!(
                        &c.result,
                        Some(CheckResult::Fail { .. }) | Some(CheckResult::Warn { .. })
                    )
                });
                if !has_issues {
                    continue;
                }
            }

            output.push_str(&format!("{}\n", header));

            for check in category_checks {
                if self.quiet {
                    if let Some(ref result) = check.result {
                        if matches!(
                            result,
                            CheckResult::Pass { .. } | CheckResult::Skip { .. }
                        ) {
                            continue;
                        }
                    }
                }

                let (status, message) = match &check.result {
                    Some(CheckResult::Pass {
                        message,
                        duration_ms,
                    }) => {
                        let status = self.paint("[PASS]", "[PASS]".green());
                        let msg = if self.verbose {
                            format!("{} ({}ms)", message, duration_ms)
                        } else {
                            message.clone()
                        };
                        (status, msg)
                    }
                    Some(CheckResult::Warn {
                        message,
                        details,
                        duration_ms,
                    }) => {
                        let status = self.paint("[WARN]", "[WARN]".yellow());
                        let msg = if self.verbose {
                            format!("{} - {} ({}ms)", message, details, duration_ms)
                        } else {
                            message.clone()
                        };
                        (status, msg)
                    }
                    Some(CheckResult::Fail {
                        message,
                        details,
                        duration_ms,
                    }) => {
                        let status = self.paint("[FAIL]", "[FAIL]".red());
                        // Failure diagnostics always surface, verbose or not
                        let msg = if details.is_empty() {
                            message.clone()
                        } else if self.verbose {
                            format!("{} - {} ({}ms)", message, details, duration_ms)
                        } else {
                            format!("{} - {}", message, details)
                        };
                        (status, msg)
                    }
                    Some(CheckResult::Skip { reason }) => {
                        let status = self.paint("[SKIP]", "[SKIP]".dimmed());
                        (status, reason.clone())
                    }
                    None => {
                        let status = self.paint("[----]", "[----]".dimmed());
                        (status, "Not executed".to_string())
                    }
                };

                output.push_str(&format!(
                    "  {} {} {}: {}\n",
                    status, check.id, check.name, message
                ));
            }

            output.push('\n');
        }

        let summary = report.summary();
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} passed, {} warnings, {} failed, {} skipped\n",
            summary.passed, summary.warned, summary.failed, summary.skipped
        ));
        output.push_str(&format!(
            "Total time: {:.1}s\n",
            report.total_duration_ms as f64 / 1000.0
        ));
        output.push_str(&"-".repeat(72));

        if summary.failed == 0 {
            output.push('\n');
            let banner = "Validation passed.";
            output.push_str(&self.paint(banner, banner.green().bold()));
        }

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let checks: Vec<_> = report
            .checks
            .iter()
            .map(|check| {
                let (status, message, details, duration_ms) = match &check.result {
                    Some(CheckResult::Pass {
                        message,
                        duration_ms,
                    }) => ("pass", message.clone(), None, Some(*duration_ms)),
                    Some(CheckResult::Warn {
                        message,
                        details,
                        duration_ms,
                    }) => (
                        "warn",
                        message.clone(),
                        Some(details.clone()),
                        Some(*duration_ms),
                    ),
                    Some(CheckResult::Fail {
                        message,
                        details,
                        duration_ms,
                    }) => (
                        "fail",
                        message.clone(),
                        Some(details.clone()),
                        Some(*duration_ms),
                    ),
                    Some(CheckResult::Skip { reason }) => {
                        ("skip", reason.clone(), None, None)
                    }
                    None => ("not_run", String::new(), None, None),
                };

                json!({
                    "id": check.id,
                    "name": check.name,
                    "category": check.category.to_string(),
                    "status": status,
                    "message": message,
                    "details": details,
                    "duration_ms": duration_ms,
                })
            })
            .collect();

        let value = json!({
            "timestamp": report.timestamp,
            "project_root": report.project_root,
            "total_duration_ms": report.total_duration_ms,
            "summary": report.summary(),
            "checks": checks,
        });

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };

        // Serialization of a json! literal cannot fail
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}
