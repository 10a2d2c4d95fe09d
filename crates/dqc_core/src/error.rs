//! Error types for schema definitions.
//!
//! These are tool-level failures: a schema that cannot be used to check data.
//! Findings about the data itself are never errors, they are `ErrorRecord`s.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A schema definition that cannot be used for validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Schema declares no columns
    #[error("Schema has no columns defined")]
    Empty,

    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Column declares a dtype outside the supported set
    #[error("Unknown type '{type_name}' for column '{column}'")]
    UnknownType {
        /// Column name
        column: String,
        /// Declared type
        type_name: String,
    },

    /// Regex declared on a non-string column
    #[error("Column '{column}' declares a regex but its type is {dtype}")]
    MisplacedRegex {
        /// Column name
        column: String,
        /// Declared type
        dtype: String,
    },

    /// Date format declared on a non-date column
    #[error("Column '{column}' declares a date format but its type is {dtype}")]
    MisplacedFormat {
        /// Column name
        column: String,
        /// Declared type
        dtype: String,
    },

    /// Date column without a format
    #[error("Date column '{0}' requires a format")]
    MissingDateFormat(String),

    /// Regex does not compile
    #[error("Invalid regex for column '{column}': {error}")]
    InvalidRegex {
        /// Column name
        column: String,
        /// Compiler message
        error: String,
    },

    /// Date format contains an unrecognised specifier
    #[error("Invalid date format '{format}' for column '{column}'")]
    InvalidDateFormat {
        /// Column name
        column: String,
        /// Offending format
        format: String,
    },
}

impl SchemaError {
    /// Creates a new unknown type error.
    pub fn unknown_type(column: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            column: column.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates a new invalid regex error.
    pub fn invalid_regex(column: impl Into<String>, error: impl Into<String>) -> Self {
        Self::InvalidRegex {
            column: column.into(),
            error: error.into(),
        }
    }

    /// Creates a new invalid date format error.
    pub fn invalid_date_format(column: impl Into<String>, format: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            column: column.into(),
            format: format.into(),
        }
    }
}
