//! Findings produced by a validation run.
//!
//! An [`ErrorRecord`] is created once by a checker and never mutated. The
//! [`ValidationResult`] owns the ordered ledger of records together with counts
//! derived from it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of data finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorKind {
    DatatypeMismatch,
    NullValue,
    RegexMismatch,
    DuplicateKey,
    SpecialCharacter,
}

impl ErrorKind {
    /// All kinds, in reporting order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::DatatypeMismatch,
        ErrorKind::NullValue,
        ErrorKind::RegexMismatch,
        ErrorKind::DuplicateKey,
        ErrorKind::SpecialCharacter,
    ];

    /// Returns the check family that produces this kind.
    pub fn family(&self) -> CheckFamily {
        match self {
            Self::DatatypeMismatch | Self::NullValue | Self::RegexMismatch => CheckFamily::Datatype,
            Self::DuplicateKey => CheckFamily::DuplicateKey,
            Self::SpecialCharacter => CheckFamily::SpecialCharacter,
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DatatypeMismatch => "Datatype Mismatch",
            Self::NullValue => "Null Value",
            Self::RegexMismatch => "Regex Mismatch",
            Self::DuplicateKey => "Duplicate Key",
            Self::SpecialCharacter => "Special Character",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three independent check families, in merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckFamily {
    Datatype,
    DuplicateKey,
    SpecialCharacter,
}

/// One atomic finding tied to a row and a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    row_index: usize,
    column_name: String,
    error_kind: ErrorKind,
    detail: String,
}

impl ErrorRecord {
    /// Creates a new finding.
    pub fn new(
        row_index: usize,
        column_name: impl Into<String>,
        error_kind: ErrorKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            row_index,
            column_name: column_name.into(),
            error_kind,
            detail: detail.into(),
        }
    }

    /// 0-based data row index (header excluded).
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} column '{}': {} ({})",
            self.row_index, self.column_name, self.error_kind, self.detail
        )
    }
}

/// Grand totals per check family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTotals {
    /// DatatypeMismatch + NullValue + RegexMismatch
    pub datatype_errors: usize,
    pub duplicate_key_errors: usize,
    pub special_char_errors: usize,
}

impl ErrorTotals {
    /// Sum of all three families.
    pub fn total(&self) -> usize {
        self.datatype_errors + self.duplicate_key_errors + self.special_char_errors
    }
}

/// Per-column, per-kind counts. Ordered maps keep serialised output stable.
pub type ColumnCounts = BTreeMap<String, BTreeMap<ErrorKind, usize>>;

/// Outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    records: Vec<ErrorRecord>,
    column_counts: ColumnCounts,
    totals: ErrorTotals,
    rows_validated: usize,
    missing_columns: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from an already ordered record sequence.
    ///
    /// Counts and totals are derived by counting over `records`.
    pub fn from_records(
        records: Vec<ErrorRecord>,
        rows_validated: usize,
        missing_columns: Vec<String>,
    ) -> Self {
        let mut column_counts = ColumnCounts::new();
        let mut totals = ErrorTotals::default();

        for record in &records {
            *column_counts
                .entry(record.column_name.clone())
                .or_default()
                .entry(record.error_kind)
                .or_insert(0) += 1;

            match record.error_kind.family() {
                CheckFamily::Datatype => totals.datatype_errors += 1,
                CheckFamily::DuplicateKey => totals.duplicate_key_errors += 1,
                CheckFamily::SpecialCharacter => totals.special_char_errors += 1,
            }
        }

        Self {
            records,
            column_counts,
            totals,
            rows_validated,
            missing_columns,
        }
    }

    /// Ordered error ledger.
    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    /// Records of a single kind, in ledger order.
    pub fn records_of(&self, kind: ErrorKind) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter().filter(move |r| r.error_kind == kind)
    }

    pub fn column_counts(&self) -> &ColumnCounts {
        &self.column_counts
    }

    /// Number of findings of `kind` in `column`.
    pub fn count_for(&self, column: &str, kind: ErrorKind) -> usize {
        self.column_counts
            .get(column)
            .and_then(|kinds| kinds.get(&kind))
            .copied()
            .unwrap_or(0)
    }

    pub fn totals(&self) -> ErrorTotals {
        self.totals
    }

    pub fn total_errors(&self) -> usize {
        self.records.len()
    }

    pub fn rows_validated(&self) -> usize {
        self.rows_validated
    }

    /// Schema columns that were absent from the data and therefore not checked.
    pub fn missing_columns(&self) -> &[String] {
        &self.missing_columns
    }

    /// True when no findings were recorded.
    pub fn passed(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_records() -> Vec<ErrorRecord> {
        vec![
            ErrorRecord::new(0, "id", ErrorKind::NullValue, "expected non-null value"),
            ErrorRecord::new(2, "email", ErrorKind::RegexMismatch, "'x' does not match"),
            ErrorRecord::new(2, "id", ErrorKind::DatatypeMismatch, "expected integer"),
            ErrorRecord::new(0, "id", ErrorKind::DuplicateKey, "'1' appears in 2 rows"),
            ErrorRecord::new(1, "id", ErrorKind::DuplicateKey, "'1' appears in 2 rows"),
            ErrorRecord::new(3, "name", ErrorKind::SpecialCharacter, "contains ';'"),
        ]
    }

    #[test]
    fn test_totals_follow_families() {
        let result = ValidationResult::from_records(sample_records(), 4, vec![]);
        let totals = result.totals();
        assert_eq!(totals.datatype_errors, 3);
        assert_eq!(totals.duplicate_key_errors, 2);
        assert_eq!(totals.special_char_errors, 1);
        assert_eq!(totals.total(), result.total_errors());
    }

    #[test]
    fn test_column_counts() {
        let result = ValidationResult::from_records(sample_records(), 4, vec![]);
        assert_eq!(result.count_for("id", ErrorKind::DuplicateKey), 2);
        assert_eq!(result.count_for("id", ErrorKind::NullValue), 1);
        assert_eq!(result.count_for("email", ErrorKind::RegexMismatch), 1);
        assert_eq!(result.count_for("email", ErrorKind::NullValue), 0);
        assert_eq!(result.count_for("unknown", ErrorKind::NullValue), 0);
    }

    #[test]
    fn test_records_keep_given_order() {
        let records = sample_records();
        let result = ValidationResult::from_records(records.clone(), 4, vec![]);
        assert_eq!(result.records(), records.as_slice());
        assert_eq!(result.records_of(ErrorKind::DuplicateKey).count(), 2);
    }

    #[test]
    fn test_empty_result_passes() {
        let result = ValidationResult::from_records(vec![], 10, vec!["extra".to_string()]);
        assert!(result.passed());
        assert_eq!(result.rows_validated(), 10);
        assert_eq!(result.missing_columns().to_vec(), vec!["extra".to_string()]);
    }

    #[test]
    fn test_serialization_is_stable() {
        let a = ValidationResult::from_records(sample_records(), 4, vec![]);
        let b = ValidationResult::from_records(sample_records(), 4, vec![]);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ErrorKind::DatatypeMismatch.to_string(), "Datatype Mismatch");
        assert_eq!(ErrorKind::NullValue.family(), CheckFamily::Datatype);
        assert_eq!(ErrorKind::SpecialCharacter.family(), CheckFamily::SpecialCharacter);
    }
}
