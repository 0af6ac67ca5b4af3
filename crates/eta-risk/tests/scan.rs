//! Codebase scan scenarios for the pre-mortem risk check.

use std::fs;
use std::path::Path;

use eta_risk::{RiskMatcher, build_report, scan_codebase};
use eta_settings::{RiskRules, ScopeSettings};
use eta_types::RiskLevel;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn matcher() -> RiskMatcher {
    RiskMatcher::compile(&RiskRules::default()).unwrap()
}

#[test]
fn missing_root_has_no_findings() {
    let tmp = TempDir::new().unwrap();
    let findings = scan_codebase(&tmp.path().join("nope"), &ScopeSettings::default(), &matcher());
    assert!(findings.is_empty());
}

#[test]
fn findings_carry_path_line_and_level() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "billing/charge.py", "import os\n\nkey = os.getenv('KEY')\n");

    let findings = scan_codebase(tmp.path(), &ScopeSettings::default(), &matcher());

    // "charge" in the path is not scanned, only contents
    assert_eq!(findings.len(), 1);
    let f = &findings[0];
    assert_eq!(f.category, "env_config");
    assert_eq!(f.pattern, "getenv");
    assert_eq!(f.line, 3);
    assert_eq!(f.level, RiskLevel::Medium);
    assert!(f.path.ends_with("charge.py"), "{}", f.path);
}

#[test]
fn skipped_dirs_and_foreign_extensions_are_not_scanned() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "node_modules/stripe/index.js", "stripe.charge()");
    write(tmp.path(), "notes.md", "password = hunter2");
    write(tmp.path(), "dist/app.js", "DROP TABLE users");

    let findings = scan_codebase(tmp.path(), &ScopeSettings::default(), &matcher());
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn files_are_scanned_in_path_order() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "b.rs", "let token = 1;");
    write(tmp.path(), "a.rs", "let token = 2;");

    let findings = scan_codebase(tmp.path(), &ScopeSettings::default(), &matcher());
    let names: Vec<_> = findings
        .iter()
        .map(|f| Path::new(&f.path).file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.rs", "b.rs"]);
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "ok.py", "secret = 1");
    std::os::unix::fs::symlink(tmp.path().join("missing.py"), tmp.path().join("ghost.py"))
        .unwrap();

    let findings = scan_codebase(tmp.path(), &ScopeSettings::default(), &matcher());
    assert_eq!(findings.len(), 1);
}

#[test]
fn report_combines_task_and_codebase() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "db.py", "cursor.execute('DELETE FROM t')\n");

    let settings = eta_settings::EtaSettings::default();
    let report = build_report(
        "Drop old database column",
        tmp.path(),
        &settings.scope,
        &settings.risk,
    )
    .unwrap();

    assert_eq!(report.task, "Drop old database column");
    assert_eq!(report.task_risks.len(), 1);
    assert_eq!(report.task_risks[0].keyword, "database");
    let patterns: Vec<_> = report.findings.iter().map(|f| f.pattern.as_str()).collect();
    assert_eq!(patterns, vec![r"\.execute\(", "DELETE FROM"]);
    assert!(!report.is_clean());
}
