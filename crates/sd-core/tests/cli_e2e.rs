//! CLI end-to-end tests for `salesdash`.
//!
//! Validates:
//! - `render` output in text and JSON, and its exit codes
//! - role gating through `--email`
//! - `whoami` role reporting
//! - `config show` / `config validate` paths

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Helpers
// ============================================================================

/// Command for the salesdash binary, isolated from the caller's environment.
fn salesdash(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("salesdash");
    cmd.timeout(Duration::from_secs(60))
        .env_remove("SALESDASH_CONFIG")
        .env_remove("SALESDASH_EMAIL")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", home);
    cmd
}

fn write_records(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("records.json");
    fs::write(&path, json).unwrap();
    path
}

const HEALTHY: &str = r#"{
  "leadgen": [
    {"week": 10, "date_range": "2-8 Mar", "sector": "Domestic", "leads_generated": 100,
     "leads_contacted": 70, "appointments_booked": 40, "spend": 800.0}
  ],
  "sales": [
    {"rep": "Ann", "week": 10, "sector": "Domestic", "appointments_sat": 40,
     "proposals_issued": 20, "sales_closed": 10},
    {"rep": "Cat", "week": 11, "sector": "Domestic", "appointments_sat": 35,
     "proposals_issued": 15, "sales_closed": 9}
  ]
}"#;

const WEAK: &str = r#"{
  "leadgen": [
    {"week": 3, "sector": "Commercial", "leads_generated": 100, "appointments_booked": 10, "spend": 50.0}
  ],
  "sales": [
    {"rep": "Bob", "week": 3, "sector": "Domestic", "appointments_sat": 5, "sales_closed": 0}
  ]
}"#;

// ============================================================================
// render
// ============================================================================

#[test]
fn render_healthy_session_is_clean() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, HEALTHY);
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .args(["--email", "paudie@example.com"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[ok] Domestic Appointments: 75"))
        .stdout(predicate::str::contains("Leads Generated (last 4 weeks)"))
        .stdout(predicate::str::contains("Spreadsheet sync not connected"));
}

#[test]
fn render_weak_session_raises_alerts() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, WEAK);
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .args(["--email", "rob@example.com"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[error] Domestic Appointments: 5"))
        .stdout(predicate::str::contains(
            "Lead to Appointment rate for Commercial is below 20%: 0.10",
        ))
        .stdout(predicate::str::contains("Bob has fewer than 8 appointments (5)"));
}

#[test]
fn render_json_schema() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, WEAK);
    let output = salesdash(dir.path())
        .args(["--format", "json", "render", "--records"])
        .arg(&records)
        .args(["--email", "rob@example.com"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).expect("parse JSON");
    assert_eq!(json["schema_version"], "1.0.0");
    assert!(json["session_id"].as_str().unwrap().starts_with("sess-"));
    assert_eq!(json["leadgen_rows"], 1);
    assert_eq!(json["sales_rows"], 1);
    assert_eq!(json["sheet_sync"]["state"], "not_connected");
    assert_eq!(json["alerts"][0]["severity"], "error");
    assert_eq!(json["leadgen_metrics"]["lead_to_appointment"]["Commercial"], 0.1);
    assert_eq!(json["rep_metrics"]["Bob"]["appointments_sat"], 5);
    assert_eq!(json["trends"].as_array().unwrap().len(), 5);
}

#[test]
fn render_role_gating_splits_forms() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, HEALTHY);
    let output = salesdash(dir.path())
        .args(["--format", "json", "render", "--records"])
        .arg(&records)
        .args(["--email", "rep1@example.com"])
        .assert()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["leadgen_rows"], 0);
    assert_eq!(json["sales_rows"], 2);
    assert_eq!(json["rejected"][0]["form"], "lead_gen");
}

#[test]
fn render_unknown_user_is_forbidden() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, HEALTHY);
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .args(["--email", "stranger@example.com"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("rejected sales rep input #1"));
}

#[test]
fn render_invalid_rows_are_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let records = write_records(
        &dir,
        r#"{"sales": [
            {"rep": "Ann", "week": 60, "sector": "Domestic", "appointments_sat": 80, "sales_closed": 20},
            {"rep": "Ann", "week": 6, "sector": "Retail", "appointments_sat": 80, "sales_closed": 20},
            {"rep": "Ann", "week": 6, "sector": "Domestic", "appointments_sat": 80, "sales_closed": 20}
        ]}"#,
    );
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .args(["--email", "paudie@example.com"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("week 60 is outside 1..=52"))
        .stdout(predicate::str::contains("unknown sector: \"Retail\""))
        .stdout(predicate::str::contains("[ok] Domestic Appointments: 80"));
}

#[test]
fn render_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(13)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn render_malformed_file_is_input_error() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, "{ nope");
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .assert()
        .code(11);
}

#[test]
fn render_uses_config_thresholds() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, WEAK);
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"thresholds": {"domestic_ok_min": 5, "domestic_warn_min": 1,
            "lead_to_appointment_min": 0.05, "rep_min_appointments": 1,
            "rep_min_appointment_to_sale": 0.0}}"#,
    )
    .unwrap();
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .arg("--config")
        .arg(&config)
        .args(["--email", "rob@example.com"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[ok] Domestic Appointments: 5"));
}

// ============================================================================
// whoami / config
// ============================================================================

#[test]
fn whoami_reports_role() {
    let dir = tempdir().unwrap();
    let output = salesdash(dir.path())
        .args(["--format", "json", "whoami", "--email", "leadgen2@example.com"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["role"], "leadgen");
    assert_eq!(json["can_submit_leadgen"], true);
    assert_eq!(json["can_submit_sales"], false);
}

#[test]
fn whoami_unknown_user_text() {
    let dir = tempdir().unwrap();
    salesdash(dir.path())
        .args(["whoami"])
        .env("SALESDASH_EMAIL", "who@else.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown user - read-only access"));
}

#[test]
fn config_show_defaults() {
    let dir = tempdir().unwrap();
    let output = salesdash(dir.path())
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["using_defaults"], true);
    assert_eq!(json["config"]["thresholds"]["domestic_ok_min"], 70);
    assert_eq!(json["config"]["trends"]["window_weeks"], 4);
}

#[test]
fn config_show_reads_env_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("env.json");
    fs::write(&config, r#"{"trends": {"window_weeks": 6}}"#).unwrap();
    let output = salesdash(dir.path())
        .args(["--format", "json", "config", "show"])
        .env("SALESDASH_CONFIG", &config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["using_defaults"], false);
    assert_eq!(json["config"]["trends"]["window_weeks"], 6);
}

#[test]
fn config_validate_rejects_inverted_bands() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.json");
    fs::write(
        &config,
        r#"{"thresholds": {"domestic_ok_min": 10, "domestic_warn_min": 50}}"#,
    )
    .unwrap();
    salesdash(dir.path())
        .args(["config", "validate"])
        .arg(&config)
        .assert()
        .code(10)
        .stdout(predicate::str::contains("domestic_warn_min (50)"));
}

#[test]
fn config_validate_accepts_good_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("good.json");
    fs::write(&config, r#"{"trends": {"window_weeks": 8}}"#).unwrap();
    salesdash(dir.path())
        .args(["config", "validate"])
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn broken_config_blocks_render() {
    let dir = tempdir().unwrap();
    let records = write_records(&dir, HEALTHY);
    let config = dir.path().join("broken.json");
    fs::write(&config, "{").unwrap();
    salesdash(dir.path())
        .args(["render", "--records"])
        .arg(&records)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(10)
        .stderr(predicate::str::contains("invalid JSON"));
}
