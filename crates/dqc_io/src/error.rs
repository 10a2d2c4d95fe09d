//! Error types for reading tables and writing reports.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Failures while moving data in or out of the engine.
#[derive(Debug, Error)]
pub enum IoError {
    /// Data file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Data file has no header row.
    #[error("CSV file has no header row: {path}")]
    MissingHeader { path: PathBuf },

    /// Failed to read or parse CSV.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write a CSV report.
    #[error("failed to write CSV report {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to create the report directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to render or save the PDF report.
    #[error("failed to write PDF report {path}: {message}")]
    Pdf { path: PathBuf, message: String },
}

impl IoError {
    pub(crate) fn csv_read(path: &Path, source: csv::Error) -> Self {
        Self::CsvRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv_write(path: &Path, source: csv::Error) -> Self {
        Self::CsvWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn pdf(path: &Path, message: impl ToString) -> Self {
        Self::Pdf {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}
