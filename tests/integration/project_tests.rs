//! End-to-end validation runs against real project trees.
//!
//! Each test builds a throwaway extension project with tempfile and runs
//! the full check catalog over it. The external runtime is replaced by a
//! small shell stub that rejects any file containing the marker
//! `SYNTAX_ERROR`, so the suite does not require Node.js.

use ext_preflight::cli::output::{OutputFormatter, TerminalFormatter};
use ext_preflight::{run_preflight, CheckResult, PreflightConfig};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VALID_MANIFEST: &str = r#"{
    "name": "demo-extension",
    "version": "0.0.1",
    "main": "./extension.js",
    "contributes": {
        "commands": [
            {"command": "demo.start", "title": "Start"},
            {"command": "demo.stop", "title": "Stop"}
        ]
    },
    "activationEvents": ["onStartupFinished"]
}"#;

/// Shell stand-in for `node --check`: exits 1 with diagnostics on stderr
/// when the checked file contains SYNTAX_ERROR, exits 0 otherwise.
fn write_stub_checker(dir: &Path) -> String {
    let path = dir.join("fake-node");
    let script = "#!/bin/sh\n\
                  file=\"$2\"\n\
                  if grep -q SYNTAX_ERROR \"$file\" 2>/dev/null; then\n\
                  \techo \"SyntaxError: unexpected token in $file\" >&2\n\
                  \texit 1\n\
                  fi\n\
                  exit 0\n";
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path.display().to_string()
}

struct TestProject {
    dir: TempDir,
    node: String,
}

impl TestProject {
    /// A fully valid project: manifest, entry script, all three lib files
    fn valid() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), VALID_MANIFEST).unwrap();
        fs::write(dir.path().join("extension.js"), "module.exports = {};\n").unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        for name in ["cdp-manager.js", "relauncher.js", "ralph-loop.js"] {
            fs::write(dir.path().join("lib").join(name), "// ok\n").unwrap();
        }
        let node = write_stub_checker(dir.path());
        TestProject { dir, node }
    }

    fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    fn config(&self) -> PreflightConfig {
        PreflightConfig {
            root: self.root(),
            node_binary: self.node.clone(),
            ..Default::default()
        }
    }

    fn write(&self, rel: &str, contents: &str) {
        fs::write(self.dir.path().join(rel), contents).unwrap();
    }

    fn remove(&self, rel: &str) {
        fs::remove_file(self.dir.path().join(rel)).unwrap();
    }
}

fn result_of<'a>(
    report: &'a ext_preflight::Report,
    id: &str,
) -> &'a CheckResult {
    report
        .checks
        .iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| panic!("check {} not in report", id))
        .result
        .as_ref()
        .unwrap()
}

#[test]
fn test_fully_valid_project_passes() {
    let project = TestProject::valid();
    let report = run_preflight(&project.config());

    assert_eq!(report.checks.len(), 7);
    assert!(!report.has_failures());
    let summary = report.summary();
    assert_eq!(summary.passed, 7);
    assert_eq!(summary.failed, 0);

    // Success banner in the rendered report
    let out = TerminalFormatter::new(false, false, false).format(&report);
    assert!(out.ends_with("Validation passed."));
}

#[test]
fn test_missing_manifest_fails_run() {
    let project = TestProject::valid();
    project.remove("package.json");
    let report = run_preflight(&project.config());

    assert!(matches!(
        result_of(&report, "MF-001"),
        CheckResult::Fail { .. }
    ));
    // Advisory checks degrade to Skip rather than doubling the failure
    assert!(matches!(
        result_of(&report, "MF-002"),
        CheckResult::Skip { .. }
    ));
    assert!(report.has_failures());
}

#[test]
fn test_malformed_manifest_fails_run() {
    let project = TestProject::valid();
    project.write("package.json", "{ this is not json");
    let report = run_preflight(&project.config());

    assert!(matches!(
        result_of(&report, "MF-001"),
        CheckResult::Fail { .. }
    ));
    assert!(report.has_failures());
}

#[test]
fn test_manifest_without_contributes_warns_but_passes() {
    let project = TestProject::valid();
    project.write("package.json", r#"{"name": "bare"}"#);
    let report = run_preflight(&project.config());

    assert!(matches!(
        result_of(&report, "MF-001"),
        CheckResult::Pass { .. }
    ));
    assert!(matches!(
        result_of(&report, "MF-002"),
        CheckResult::Warn { .. }
    ));
    assert!(matches!(
        result_of(&report, "MF-003"),
        CheckResult::Warn { .. }
    ));
    // Warnings never fail the run
    assert!(!report.has_failures());
}

#[test]
fn test_commands_are_counted_and_listed() {
    let project = TestProject::valid();
    project.write(
        "package.json",
        r#"{"contributes": {"commands": [{"command": "foo.bar"}]}}"#,
    );
    let report = run_preflight(&project.config());

    match result_of(&report, "MF-002") {
        CheckResult::Pass { message, .. } => {
            assert!(message.starts_with("Commands found: 1"));
            assert!(message.contains("foo.bar"));
        }
        other => panic!("expected Pass, got {:?}", other),
    }
}

#[test]
fn test_entry_syntax_error_fails_but_siblings_still_run() {
    let project = TestProject::valid();
    project.write("extension.js", "function ( { SYNTAX_ERROR\n");
    let report = run_preflight(&project.config());

    match result_of(&report, "ENT-001") {
        CheckResult::Fail { details, .. } => assert!(details.contains("SyntaxError")),
        other => panic!("expected Fail, got {:?}", other),
    }

    // Full-scan: the library checks ran and passed independently
    for id in ["LIB-001", "LIB-002", "LIB-003"] {
        assert!(matches!(result_of(&report, id), CheckResult::Pass { .. }));
    }
    assert!(report.has_failures());
}

#[test]
fn test_missing_library_file_does_not_stop_the_scan() {
    let project = TestProject::valid();
    project.remove("lib/relauncher.js");
    let report = run_preflight(&project.config());

    match result_of(&report, "LIB-002") {
        CheckResult::Fail { message, .. } => assert!(message.contains("missing")),
        other => panic!("expected Fail, got {:?}", other),
    }
    assert!(matches!(
        result_of(&report, "LIB-001"),
        CheckResult::Pass { .. }
    ));
    assert!(matches!(
        result_of(&report, "LIB-003"),
        CheckResult::Pass { .. }
    ));
}

#[test]
fn test_library_syntax_error_is_reported_per_file() {
    let project = TestProject::valid();
    project.write("lib/ralph-loop.js", "while ( { SYNTAX_ERROR\n");
    let report = run_preflight(&project.config());

    assert!(matches!(
        result_of(&report, "LIB-003"),
        CheckResult::Fail { .. }
    ));
    assert!(matches!(
        result_of(&report, "LIB-001"),
        CheckResult::Pass { .. }
    ));
    assert!(report.has_failures());
}

#[test]
fn test_unavailable_runtime_fails_syntax_checks() {
    let project = TestProject::valid();
    let config = PreflightConfig {
        node_binary: "definitely-not-a-real-binary-c4f1".to_string(),
        ..project.config()
    };
    let report = run_preflight(&config);

    match result_of(&report, "ENT-001") {
        CheckResult::Fail { details, .. } => {
            assert!(details.contains("failed to invoke"));
        }
        other => panic!("expected Fail, got {:?}", other),
    }
    // Manifest checks are unaffected by the runtime being absent
    assert!(matches!(
        result_of(&report, "MF-001"),
        CheckResult::Pass { .. }
    ));
}

#[test]
fn test_only_and_skip_selection() {
    let project = TestProject::valid();

    let config = PreflightConfig {
        only_checks: vec!["MF-001".to_string()],
        ..project.config()
    };
    let report = run_preflight(&config);
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.checks[0].id, "MF-001");

    let config = PreflightConfig {
        skip_checks: vec!["ENT-001".to_string()],
        ..project.config()
    };
    let report = run_preflight(&config);
    assert_eq!(report.checks.len(), 6);
    assert!(report.checks.iter().all(|c| c.id != "ENT-001"));
}
