//! Parse-attempt functions, one per dtype.
//!
//! Each function either yields the parsed value or a [`CoercionError`] saying
//! what was expected and what was found. [`coerce`] composes them for a cell
//! and its column contract.

use crate::CellValue;
use chrono::{NaiveDate, NaiveDateTime};
use dqc_core::{ColumnType, DataType};
use thiserror::Error;

/// Closed set of text tokens recognised as booleans.
pub const TRUE_TOKENS: [&str; 7] = ["true", "True", "TRUE", "yes", "Yes", "YES", "1"];
pub const FALSE_TOKENS: [&str; 7] = ["false", "False", "FALSE", "no", "No", "NO", "0"];

/// A cell that does not parse as its column's dtype.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct CoercionError {
    /// Human description of what was expected
    pub expected: String,
    /// Human description of what was found
    pub found: String,
}

impl CoercionError {
    fn text(expected: impl Into<String>, text: &str) -> Self {
        Self {
            expected: expected.into(),
            found: format!("'{text}'"),
        }
    }

    fn typed(expected: DataType, cell: &CellValue) -> Self {
        Self {
            expected: expected.to_string(),
            found: cell.type_name().to_string(),
        }
    }
}

/// Parses a whole number: optional sign then digits, fitting in an `i64`.
pub fn parse_integer(text: &str) -> Result<i64, CoercionError> {
    text.parse::<i64>()
        .map_err(|_| CoercionError::text(DataType::Integer.as_str(), text))
}

/// Parses a finite decimal number, exponent notation included.
pub fn parse_float(text: &str) -> Result<f64, CoercionError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoercionError::text(DataType::Float.as_str(), text)),
    }
}

/// Parses one of the recognised boolean tokens.
pub fn parse_boolean(text: &str) -> Result<bool, CoercionError> {
    if TRUE_TOKENS.contains(&text) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&text) {
        Ok(false)
    } else {
        Err(CoercionError::text(DataType::Boolean.as_str(), text))
    }
}

/// Parses a date with a chrono strftime format.
///
/// Formats carrying time fields are accepted; the time part is dropped.
pub fn parse_date(text: &str, format: &str) -> Result<NaiveDate, CoercionError> {
    NaiveDate::parse_from_str(text, format)
        .or_else(|_| NaiveDateTime::parse_from_str(text, format).map(|dt| dt.date()))
        .map_err(|_| CoercionError::text(format!("date in format '{format}'"), text))
}

/// Checks that a non-null cell conforms to a column type.
///
/// Text cells go through the parse function of the dtype. Pre-typed cells are
/// accepted when they already are that dtype; an integer also satisfies a float
/// column. String columns accept any cell.
pub fn coerce(cell: &CellValue, column_type: &ColumnType) -> Result<(), CoercionError> {
    let dtype = column_type.dtype();
    match (column_type, cell) {
        (ColumnType::String { .. }, _) => Ok(()),

        (ColumnType::Integer, CellValue::Text(text)) => parse_integer(text).map(drop),
        (ColumnType::Integer, CellValue::Int(_)) => Ok(()),

        (ColumnType::Float, CellValue::Text(text)) => parse_float(text).map(drop),
        (ColumnType::Float, CellValue::Int(_)) => Ok(()),
        (ColumnType::Float, CellValue::Float(value)) if value.is_finite() => Ok(()),
        (ColumnType::Float, CellValue::Float(value)) => Err(CoercionError {
            expected: format!("finite {dtype}"),
            found: format!("'{value}'"),
        }),

        (ColumnType::Boolean, CellValue::Text(text)) => parse_boolean(text).map(drop),
        (ColumnType::Boolean, CellValue::Bool(_)) => Ok(()),

        (ColumnType::Date { format }, CellValue::Text(text)) => {
            parse_date(text, format).map(drop)
        }
        (ColumnType::Date { .. }, CellValue::Date(_)) => Ok(()),

        _ => Err(CoercionError::typed(dtype, cell)),
    }
}
