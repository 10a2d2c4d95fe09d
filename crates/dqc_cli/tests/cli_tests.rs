use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the dqc binary
#[allow(deprecated)]
fn dqc() -> Command {
    Command::cargo_bin("dqc").expect("Failed to find dqc binary")
}

// ============================================================================
// schema command tests
// ============================================================================

#[test]
fn test_schema_yaml() {
    dqc()
        .arg("schema")
        .arg(fixture_path("customers.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema is valid"))
        .stdout(predicate::str::contains("customers"))
        .stdout(predicate::str::contains("CustomerID (integer, not null)"))
        .stdout(predicate::str::contains("format=%Y-%m-%d"));
}

#[test]
fn test_schema_toml() {
    dqc()
        .arg("schema")
        .arg(fixture_path("customers.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance (float, nullable)"));
}

#[test]
fn test_schema_invalid() {
    dqc()
        .arg("schema")
        .arg(fixture_path("invalid_schema.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("uuid"));
}

#[test]
fn test_schema_missing_file() {
    dqc()
        .arg("schema")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_clean_data_passes() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_clean.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"))
        .stdout(predicate::str::contains("Total datatype_errors: 0"))
        .stdout(predicate::str::contains("Rows validated: 3"));
}

#[test]
fn test_check_dirty_data_fails_with_summary() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_dirty.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains(
            "Column: CustomerID, Error Type: Duplicate Key, Count: 2",
        ))
        .stdout(predicate::str::contains("Total datatype_errors: 5"))
        .stdout(predicate::str::contains("Total duplicate_key_errors: 2"))
        .stdout(predicate::str::contains("Total special_char_errors: 1"));
}

#[test]
fn test_check_json_output() {
    let output = dqc()
        .arg("check")
        .arg(fixture_path("customers_dirty.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["rows_validated"], 4);
    assert_eq!(json["summary"]["total_errors"], 8);
    assert_eq!(json["errors"][0]["column_name"], "SignupDate");
    assert_eq!(json["errors"][0]["error_kind"], "DatatypeMismatch");
    assert_eq!(json["column_counts"]["CustomerID"]["DuplicateKey"], 2);
}

#[test]
fn test_check_writes_reports() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("reports");

    dqc()
        .arg("check")
        .arg(fixture_path("customers_dirty.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .arg("--csv-report")
        .arg("--pdf-report")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Report written"));

    let errors = fs::read_to_string(out.join("validation_errors.csv")).unwrap();
    assert!(errors.starts_with("row_index,column_name,error_kind,detail\n"));
    assert_eq!(errors.lines().count(), 9);
    assert!(out.join("validation_summary.csv").exists());
    assert!(out.join("validation_report.pdf").exists());
}

#[test]
fn test_check_primary_key_flag_overrides_schema() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_dirty.csv"))
        .arg("--schema")
        .arg(fixture_path("no_primary_key.yml"))
        .arg("--primary-key")
        .arg("Email")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total duplicate_key_errors: 0"))
        .stdout(predicate::str::contains("Total datatype_errors: 1"));
}

#[test]
fn test_check_without_primary_key() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_clean.csv"))
        .arg("--schema")
        .arg(fixture_path("no_primary_key.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No primary key given"));
}

#[test]
fn test_check_unknown_primary_key_column() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_clean.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .arg("--primary-key")
        .arg("OrderID")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("OrderID"));
}

#[test]
fn test_check_missing_columns_warn_or_fail_in_strict_mode() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_partial.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Column 'SignupDate' not found in data"));

    dqc()
        .arg("check")
        .arg(fixture_path("customers_partial.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SignupDate, Active"));
}

#[test]
fn test_check_missing_data_file() {
    dqc()
        .arg("check")
        .arg("nonexistent.csv")
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("nonexistent.csv"));
}

#[test]
fn test_check_rejects_unknown_format() {
    dqc()
        .arg("check")
        .arg(fixture_path("customers_clean.csv"))
        .arg("--schema")
        .arg(fixture_path("customers.yml"))
        .arg("--format")
        .arg("xml")
        .assert()
        .failure();
}
