//! Integration tests for the payout report CLI.
//!
//! These tests run the actual binary against the CSV fixtures in `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Binary with a fixed log filter so stderr assertions do not depend on the
/// caller's environment
fn report_cmd() -> Command {
    let mut cmd = Command::cargo_bin("payout-report").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the binary with the given input files and return stdout
fn run_payout(files: &[&str]) -> String {
    let mut cmd = report_cmd();
    for file in files {
        cmd.arg(test_data_path(file));
    }
    let assert = cmd.args(["--report", "payout"]).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_engineering_payout() {
    let output = run_payout(&["engineering.csv"]);

    assert!(output.contains("Engineering"));
    assert!(output.contains("John Doe"));
    assert!(output.contains("Jane Smith"));
    assert!(output.contains("Total hours:"));
    assert!(output.contains("$2050"));
}

#[test]
fn test_success_is_logged() {
    report_cmd()
        .arg(test_data_path("engineering.csv"))
        .args(["--report", "payout"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Report 'payout' generated successfully"));
}

#[test]
fn test_multiple_files_keep_file_order() {
    let output = run_payout(&["salary_alias.csv", "engineering.csv"]);

    let marketing = output.find("Marketing").unwrap();
    let design = output.find("Design").unwrap();
    let engineering = output.find("Engineering").unwrap();
    assert!(marketing < design);
    assert!(design < engineering);

    // Design: 150*40 + 170*60
    assert!(output.contains("$16200"));
}

#[test]
fn test_rate_alias_and_blank_lines() {
    let output = run_payout(&["rate_alias.csv"]);

    assert!(output.contains("Grace Lee"));
    assert!(output.contains("Ivy Clark"));
    assert!(!output.contains("Broken Row"));
    // HR: 160*45 + 158*38
    assert!(output.contains("$13204"));
}

#[test]
fn test_malformed_rows_are_warned_not_fatal() {
    report_cmd()
        .arg(test_data_path("malformed.csv"))
        .args(["--report", "payout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Broken").not())
        .stderr(predicate::str::contains("Skipping malformed row"));
}

#[test]
fn test_missing_rate_column_fails() {
    report_cmd()
        .arg(test_data_path("missing_rate.csv"))
        .args(["--report", "payout"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing rate column"))
        .stderr(predicate::str::contains("missing_rate.csv"));
}

#[test]
fn test_missing_rate_column_aborts_other_files() {
    report_cmd()
        .arg(test_data_path("engineering.csv"))
        .arg(test_data_path("missing_rate.csv"))
        .args(["--report", "payout"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_report_type() {
    report_cmd()
        .arg(test_data_path("engineering.csv"))
        .args(["--report", "average"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown report type: average"));
}

#[test]
fn test_nonexistent_files_are_skipped() {
    report_cmd()
        .arg("nonexistent.csv")
        .arg(test_data_path("engineering.csv"))
        .args(["--report", "payout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2050"))
        .stderr(predicate::str::contains("File not found or is not a file: nonexistent.csv"));
}

#[test]
fn test_no_valid_files_error() {
    report_cmd()
        .args(["nonexistent.csv", "tests/data", "--report", "payout"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No valid input files provided"));
}

#[test]
fn test_missing_report_argument() {
    report_cmd()
        .arg(test_data_path("engineering.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--report"));
}

#[test]
fn test_custom_rate_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pay.csv");
    fs::write(
        &path,
        "id,email,name,department,hours_worked,pay\n1,a@example.com,Ann,Ops,10,7\n",
    )
    .unwrap();

    report_cmd()
        .arg(&path)
        .args(["--report", "payout", "--rate-field", "pay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$70"));

    report_cmd()
        .arg(&path)
        .args(["--report", "payout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing rate column"));
}
