//! End-to-end scenarios for the validation engine.
//!
//! These cover the behaviours downstream reports rely on:
//! - Record counts per kind for known inputs
//! - Deterministic ordering and repeatable output
//! - Totals derived from the ledger

use dqc_core::{ColumnBuilder, ErrorKind, ErrorRecord, SchemaBuilder, SpecialCharConfig};
use dqc_validator::{QualityEngine, Table, aggregate};
use pretty_assertions::assert_eq;

fn summary(records: &[ErrorRecord]) -> Vec<(usize, &str, ErrorKind)> {
    records
        .iter()
        .map(|r| (r.row_index(), r.column_name(), r.error_kind()))
        .collect()
}

#[test]
fn test_duplicate_and_type_mismatch_scenario() {
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::integer("CustomerID").nullable(false).build())
        .build();
    let table = Table::from_strings(&["CustomerID"], &[&["1"], &["1"], &["abc"]]);

    let result = aggregate(&schema, &table, "CustomerID").unwrap();

    assert_eq!(
        summary(result.records()),
        vec![
            (2, "CustomerID", ErrorKind::DatatypeMismatch),
            (0, "CustomerID", ErrorKind::DuplicateKey),
            (1, "CustomerID", ErrorKind::DuplicateKey),
        ]
    );
    assert!(result.records()[0].detail().contains("'abc'"));
    assert_eq!(result.totals().datatype_errors, 1);
    assert_eq!(result.totals().duplicate_key_errors, 2);
    assert_eq!(result.totals().special_char_errors, 0);
}

#[test]
fn test_email_regex_scenario() {
    let schema = SchemaBuilder::new()
        .column(
            ColumnBuilder::string("Email")
                .regex(r"[^@]+@[^@]+\.[^@]+")
                .nullable(true)
                .build(),
        )
        .build();
    let table = Table::from_strings(&["Email"], &[&["a@b.com"], &[""], &["not-an-email"]]);

    let result = aggregate(&schema, &table, "Email").unwrap();

    assert_eq!(
        summary(result.records()),
        vec![(2, "Email", ErrorKind::RegexMismatch)]
    );
}

#[test]
fn test_special_character_scenario() {
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::integer("id").build())
        .column(ColumnBuilder::string("Name").build())
        .special_characters(
            SpecialCharConfig::new()
                .with_columns(vec!["Name".to_string()])
                .with_denylist("\t")
                .with_flag_control(false),
        )
        .build();
    let table = Table::from_strings(&["id", "Name"], &[&["1", "Jöhn\tDoe"], &["2", "Jöhn Doe"]]);

    let result = aggregate(&schema, &table, "id").unwrap();

    assert_eq!(
        summary(result.records()),
        vec![(0, "Name", ErrorKind::SpecialCharacter)]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::integer("id").nullable(false).build())
        .column(ColumnBuilder::string("code").regex("[A-Z]{2}").build())
        .column(ColumnBuilder::date("day", "%Y-%m-%d").build())
        .column(ColumnBuilder::string("note").build())
        .build();
    let table = Table::from_strings(
        &["id", "code", "day", "note"],
        &[
            &["1", "AB", "2024-01-01", "fine"],
            &["1", "abc", "01/01/2024", "semi;colon"],
            &["", "CD", "", "tab\there"],
            &["x", "EF", "2024-13-01", ""],
        ],
    );
    let engine = QualityEngine::new();

    let first = engine.validate(&schema, &table, "id").unwrap();
    let second = engine.validate(&schema, &table, "id").unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_totals_match_ledger() {
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::integer("id").nullable(false).build())
        .column(ColumnBuilder::boolean("active").build())
        .column(ColumnBuilder::string("name").regex("[A-Za-z ]+").build())
        .build();
    let table = Table::from_strings(
        &["id", "active", "name"],
        &[
            &["1", "yes", "Ann"],
            &["2", "maybe", "B0b"],
            &["2", "0", "Cy, Jr"],
            &["", "TRUE", "Dee"],
        ],
    );

    let result = aggregate(&schema, &table, "id").unwrap();
    let totals = result.totals();

    let count = |kinds: &[ErrorKind]| {
        result
            .records()
            .iter()
            .filter(|r| kinds.contains(&r.error_kind()))
            .count()
    };
    assert_eq!(
        totals.datatype_errors,
        count(&[
            ErrorKind::DatatypeMismatch,
            ErrorKind::NullValue,
            ErrorKind::RegexMismatch
        ])
    );
    assert_eq!(totals.duplicate_key_errors, count(&[ErrorKind::DuplicateKey]));
    assert_eq!(
        totals.special_char_errors,
        count(&[ErrorKind::SpecialCharacter])
    );
    assert_eq!(totals.total(), result.total_errors());

    // "maybe" plus "B0b" plus "Cy, Jr" (regex) plus the null id
    assert_eq!(totals.datatype_errors, 4);
    assert_eq!(totals.duplicate_key_errors, 2);
    assert_eq!(totals.special_char_errors, 1);
    assert_eq!(result.count_for("name", ErrorKind::RegexMismatch), 2);
}

#[test]
fn test_duplicate_count_matches_occurrences() {
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::string("sku").build())
        .build();
    let table = Table::from_strings(
        &["sku"],
        &[&["A"], &["B"], &["A"], &["C"], &["A"], &["B"], &["D"]],
    );

    let result = aggregate(&schema, &table, "sku").unwrap();
    let rows: Vec<usize> = result
        .records_of(ErrorKind::DuplicateKey)
        .map(|r| r.row_index())
        .collect();

    assert_eq!(rows, vec![0, 1, 2, 4, 5]);
    assert_eq!(result.count_for("sku", ErrorKind::DuplicateKey), 5);
}

#[test]
fn test_null_primary_keys_reported_only_as_nulls() {
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::integer("id").nullable(false).build())
        .build();
    let table = Table::from_strings(&["id"], &[&[""], &["5"], &[""]]);

    let result = aggregate(&schema, &table, "id").unwrap();

    assert_eq!(
        summary(result.records()),
        vec![(0, "id", ErrorKind::NullValue), (2, "id", ErrorKind::NullValue)]
    );
}

#[test]
fn test_unscanned_columns_are_ignored() {
    // Columns outside the schema are never validated
    let schema = SchemaBuilder::new()
        .column(ColumnBuilder::integer("id").build())
        .build();
    let table = Table::from_strings(&["id", "extra"], &[&["1", "a,b;c"], &["2", "not-int"]]);

    let result = aggregate(&schema, &table, "id").unwrap();
    assert!(result.passed());
}
