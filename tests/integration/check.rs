use armgraph::test_utils::{RunLogFixture, TemplateFixture};
use predicates::prelude::*;
use tempfile::TempDir;

use super::armgraph;

/// A well-formed template passes.
#[test]
fn test_check_valid_template() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::web_app().write_to(temp.path()).unwrap();

    armgraph(temp.path())
        .args(["-q", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("no primary resource").not());
}

/// Anomalies are reported but do not fail the command unless --strict.
#[test]
fn test_check_reports_anomalies() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::no_primary_resource().write_to(temp.path()).unwrap();

    armgraph(temp.path())
        .args(["-q", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid"))
        .stdout(predicate::str::contains("missing-ip"))
        .stdout(predicate::str::contains("has no primary resource"));

    armgraph(temp.path())
        .args(["-q", "check", "--strict"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 1 manifest(s) failed checks"));
}

/// The default input is template.json in the working directory.
#[test]
fn test_check_default_input() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("template.json"), TemplateFixture::web_app().content).unwrap();

    armgraph(temp.path())
        .args(["-q", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template.json"));
}

#[test]
fn test_check_missing_input() {
    let temp = TempDir::new().unwrap();

    armgraph(temp.path())
        .args(["check", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_check_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("template.yaml"), "resources: []").unwrap();

    armgraph(temp.path())
        .args(["check", "template.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no reader for extension 'yaml'"));
}

#[test]
fn test_check_invalid_json() {
    let temp = TempDir::new().unwrap();
    let path = TemplateFixture::invalid().write_to(temp.path()).unwrap();

    armgraph(temp.path())
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest"));
}

/// Each run-log row becomes its own manifest, labeled timestamp+run id.
#[test]
fn test_check_run_log_json_report() {
    let temp = TempDir::new().unwrap();
    let path = RunLogFixture::new()
        .row("2024-05-01T10:00:00Z", "run-1", &TemplateFixture::web_app())
        .raw("2024-05-01T10:30:00Z,run-broken,{")
        .row("2024-05-01T11:00:00Z", "run-2", &TemplateFixture::no_primary_resource())
        .write_to(temp.path(), "results.csv")
        .unwrap();

    let output = armgraph(temp.path())
        .args(["-q", "check", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["label"], "2024-05-01T10:00:00Z+run-1");
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[1]["label"], "2024-05-01T11:00:00Z+run-2");
    assert_eq!(reports[1]["has_primary_resource"], false);
}
