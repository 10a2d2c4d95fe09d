//! Error types for validation runs.
//!
//! Only tool-level failures are errors. A malformed cell is a finding and never
//! aborts the run.

use dqc_core::SchemaError;
use thiserror::Error;

/// Result type for validation runs.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Conditions under which validation cannot produce a meaningful result.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Schema definition is unusable
    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// Primary key column is absent from the data
    #[error("Primary key column '{0}' is not present in the data")]
    MissingPrimaryKey(String),

    /// Schema columns are absent from the data (strict mode only)
    #[error("Schema columns missing from the data: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl ValidationError {
    /// Creates a new missing primary key error.
    pub fn missing_primary_key(column: impl Into<String>) -> Self {
        Self::MissingPrimaryKey(column.into())
    }
}
