//! # Data Quality Check SDK
//!
//! One call to load a table, validate it and write the requested reports.
//!
//! ## Example
//!
//! ```rust
//! use dqc_sdk::{
//!     CheckOptions, ColumnBuilder, DataSource, ReportOptions, SchemaBuilder, Table,
//!     run_quality_check,
//! };
//!
//! let schema = SchemaBuilder::new()
//!     .column(ColumnBuilder::integer("CustomerID").nullable(false).build())
//!     .build();
//! let table = Table::from_strings(&["CustomerID"], &[&["1"], &["2"]]);
//!
//! let outcome = run_quality_check(
//!     DataSource::Table(table),
//!     &schema,
//!     "CustomerID",
//!     &CheckOptions::default(),
//!     &ReportOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(outcome.result.passed());
//! assert!(outcome.reports.is_empty());
//! ```

pub use dqc_core::{
    CheckOptions, ColumnBuilder, ColumnSpec, ColumnType, ErrorKind, ErrorRecord, ErrorTotals,
    ReportOptions, Schema, SchemaBuilder, SpecialCharConfig, ValidationResult,
};
pub use dqc_io::{IoError, format_summary};
pub use dqc_parser::ParserError;
pub use dqc_validator::{CellValue, QualityEngine, Row, Table, ValidationError};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Title used for reports when the schema has no name.
pub const DEFAULT_REPORT_TITLE: &str = "Data Quality Report";

/// A tool-level failure: the check could not produce a meaningful result.
#[derive(Debug, Error)]
pub enum QualityCheckError {
    /// Schema document could not be loaded
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// Data could not be read or a report could not be written
    #[error(transparent)]
    Io(#[from] IoError),

    /// Engine refused the inputs
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Where the table comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// CSV file with a header row
    Path(PathBuf),
    /// Table already in memory
    Table(Table),
}

impl From<PathBuf> for DataSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for DataSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Table> for DataSource {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// Result of a completed check.
#[derive(Debug, Clone)]
pub struct QualityCheckOutcome {
    pub result: ValidationResult,
    /// Paths of the reports written, in writing order
    pub reports: Vec<PathBuf>,
}

/// Loads a schema document (YAML or TOML, chosen by extension).
pub fn load_schema(path: &Path) -> Result<Schema, QualityCheckError> {
    Ok(dqc_parser::parse_file(path)?)
}

/// Reads the data, validates it and writes every enabled report.
///
/// Data findings never make this fail; they are in the returned result.
///
/// # Errors
///
/// Fails when the data cannot be read, when the engine rejects the schema or
/// primary key, or when a report cannot be written.
pub fn run_quality_check(
    source: DataSource,
    schema: &Schema,
    primary_key: &str,
    checks: &CheckOptions,
    reports: &ReportOptions,
) -> Result<QualityCheckOutcome, QualityCheckError> {
    let table = match source {
        DataSource::Path(path) => dqc_io::read_csv_table(&path)?,
        DataSource::Table(table) => table,
    };

    let result = QualityEngine::with_options(checks.clone()).validate(schema, &table, primary_key)?;

    let mut written = Vec::new();
    if reports.generate_csv_report {
        written.extend(dqc_io::write_csv_reports(&result, &reports.output_dir)?);
    }
    if reports.generate_pdf_report {
        let title = schema.name.as_deref().unwrap_or(DEFAULT_REPORT_TITLE);
        written.push(dqc_io::write_pdf_report(
            &result,
            title,
            &reports.output_dir,
        )?);
    }

    info!(
        passed = result.passed(),
        total_errors = result.total_errors(),
        reports = written.len(),
        "Quality check finished"
    );

    Ok(QualityCheckOutcome {
        result,
        reports: written,
    })
}
