//! CSV report writers.

use crate::{IoError, Result};
use dqc_core::ValidationResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the per-record error report.
pub const ERRORS_FILE: &str = "validation_errors.csv";

/// File name of the totals report.
pub const SUMMARY_FILE: &str = "validation_summary.csv";

const ERROR_HEADER: [&str; 4] = ["row_index", "column_name", "error_kind", "detail"];

/// Writes `validation_errors.csv` and `validation_summary.csv` into `dir`,
/// creating it if needed. Returns the written paths.
pub fn write_csv_reports(result: &ValidationResult, dir: &Path) -> Result<Vec<PathBuf>> {
    crate::ensure_dir(dir)?;
    let errors = write_error_report(result, &dir.join(ERRORS_FILE))?;
    let summary = write_summary_report(result, &dir.join(SUMMARY_FILE))?;
    Ok(vec![errors, summary])
}

/// Writes one line per record, in result order.
pub fn write_error_report(result: &ValidationResult, path: &Path) -> Result<PathBuf> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| IoError::csv_write(path, e))?;

    writer
        .write_record(ERROR_HEADER)
        .map_err(|e| IoError::csv_write(path, e))?;
    for record in result.records() {
        writer
            .serialize(record)
            .map_err(|e| IoError::csv_write(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| IoError::csv_write(path, e.into()))?;

    info!(path = %path.display(), records = result.total_errors(), "Wrote CSV error report");
    Ok(path.to_path_buf())
}

/// Writes `metric,count` lines: the three totals, rows validated, then one line
/// per column and kind.
pub fn write_summary_report(result: &ValidationResult, path: &Path) -> Result<PathBuf> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::csv_write(path, e))?;

    let totals = result.totals();
    let mut metrics = vec![
        ("datatype_errors".to_string(), totals.datatype_errors),
        ("duplicate_key_errors".to_string(), totals.duplicate_key_errors),
        ("special_char_errors".to_string(), totals.special_char_errors),
        ("rows_validated".to_string(), result.rows_validated()),
    ];
    for (column, kinds) in result.column_counts() {
        for (kind, count) in kinds {
            metrics.push((format!("{column}:{kind:?}"), *count));
        }
    }

    writer
        .write_record(["metric", "count"])
        .map_err(|e| IoError::csv_write(path, e))?;
    for (metric, count) in metrics {
        writer
            .write_record([metric, count.to_string()])
            .map_err(|e| IoError::csv_write(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| IoError::csv_write(path, e.into()))?;

    info!(path = %path.display(), "Wrote CSV summary report");
    Ok(path.to_path_buf())
}
