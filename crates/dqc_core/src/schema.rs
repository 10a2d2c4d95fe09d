//! Schema model: the expected contract of every column.
//!
//! A column's dtype is a closed sum type. Rules that only make sense for one
//! dtype live on that variant: a regex can only be attached to a string column
//! and a date column cannot exist without its format.

use crate::{Result, SchemaError, SpecialCharConfig};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Write as _};

/// Schema describing the expected columns of a table.
///
/// Column order matters: findings for a row are reported in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Optional dataset name, used as the report title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Column used to test row uniqueness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,

    /// Column contracts in declaration order
    pub columns: Vec<ColumnSpec>,

    /// Special character scan configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_characters: Option<SpecialCharConfig>,
}

impl Schema {
    /// Creates a schema from a list of columns.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: None,
            primary_key: None,
            columns,
            special_characters: None,
        }
    }

    /// Looks up a column contract by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns every string-typed column in declaration order.
    pub fn string_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns
            .iter()
            .filter(|c| c.dtype() == DataType::String)
    }

    /// Checks that the schema definition is usable.
    ///
    /// Fails on the first problem found: no columns, a duplicated column name,
    /// a regex that does not compile, or an unusable date format.
    pub fn validate(&self) -> Result<()> {
        self.validate_structure()?;
        for column in &self.columns {
            column.compile_regex()?;
        }
        Ok(())
    }

    /// Runs every check of [`validate`](Self::validate) except regex
    /// compilation, for callers that compile the regexes themselves.
    pub fn validate_structure(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.name.clone()));
            }
            column.check_date_format()?;
        }

        Ok(())
    }
}

/// Scalar type a column's cells must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Integer,
    Float,
    Boolean,
    String,
    Date,
}

impl DataType {
    /// Resolves a declared type name, accepting common aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "integer" | "int" | "int64" | "long" => Some(Self::Integer),
            "float" | "float64" | "double" => Some(Self::Float),
            "boolean" | "bool" => Some(Self::Boolean),
            "string" | "str" | "text" => Some(Self::String),
            "date" | "datetime" => Some(Self::Date),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-variant column contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    /// Free text, optionally constrained by a full-match regex
    String { regex: Option<String> },
    /// Text parsed with a chrono strftime format
    Date { format: String },
}

impl ColumnType {
    /// Returns the scalar dtype of this variant.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::Integer => DataType::Integer,
            Self::Float => DataType::Float,
            Self::Boolean => DataType::Boolean,
            Self::String { .. } => DataType::String,
            Self::Date { .. } => DataType::Date,
        }
    }
}

/// Contract for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColumnDocument", into = "ColumnDocument")]
pub struct ColumnSpec {
    /// Column name as it appears in the header row
    pub name: String,

    /// Dtype and its dtype-specific rules
    pub column_type: ColumnType,

    /// Whether empty cells are acceptable
    pub nullable: bool,
}

impl ColumnSpec {
    /// Creates a nullable column contract.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
        }
    }

    /// Returns the scalar dtype.
    pub fn dtype(&self) -> DataType {
        self.column_type.dtype()
    }

    /// Returns the regex for string columns that declare one.
    pub fn regex(&self) -> Option<&str> {
        match &self.column_type {
            ColumnType::String { regex } => regex.as_deref(),
            _ => None,
        }
    }

    /// Returns the date format for date columns.
    pub fn date_format(&self) -> Option<&str> {
        match &self.column_type {
            ColumnType::Date { format } => Some(format),
            _ => None,
        }
    }

    /// Compiles the column's regex, anchored to match the whole cell.
    pub fn compile_regex(&self) -> Result<Option<Regex>> {
        self.regex()
            .map(|pattern| {
                Regex::new(&anchored_pattern(pattern))
                    .map_err(|e| SchemaError::invalid_regex(&self.name, e.to_string()))
            })
            .transpose()
    }

    fn check_date_format(&self) -> Result<()> {
        let Some(format) = self.date_format() else {
            return Ok(());
        };

        let has_error = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
        if format.trim().is_empty() || has_error || !identifies_a_day(format) {
            return Err(SchemaError::invalid_date_format(&self.name, format));
        }
        Ok(())
    }
}

/// Formats a sample timestamp and parses it back as cells are parsed.
///
/// Rejects well-formed formats that can never yield a date, such as `%Y-%m`.
fn identifies_a_day(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 1, 31).and_then(|d| d.and_hms_opt(13, 45, 30))
    else {
        return false;
    };

    let mut text = String::new();
    if write!(text, "{}", sample.and_utc().format(format)).is_err() {
        return false;
    }

    NaiveDate::parse_from_str(&text, format)
        .or_else(|_| NaiveDateTime::parse_from_str(&text, format).map(|dt| dt.date()))
        .is_ok_and(|date| date == sample.date())
}

/// Wraps a pattern so that it must match the entire input.
pub fn anchored_pattern(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

fn default_nullable() -> bool {
    true
}

/// On-disk representation of a column contract.
///
/// Converted into a [`ColumnSpec`] on load, which rejects rules attached to the
/// wrong dtype.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDocument {
    pub name: String,

    #[serde(rename = "type", alias = "dtype")]
    pub dtype: String,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    #[serde(default, alias = "date_format", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl TryFrom<ColumnDocument> for ColumnSpec {
    type Error = SchemaError;

    fn try_from(doc: ColumnDocument) -> Result<Self> {
        let dtype = DataType::from_name(&doc.dtype)
            .ok_or_else(|| SchemaError::unknown_type(&doc.name, &doc.dtype))?;

        if doc.regex.is_some() && dtype != DataType::String {
            return Err(SchemaError::MisplacedRegex {
                column: doc.name,
                dtype: dtype.to_string(),
            });
        }
        if doc.format.is_some() && dtype != DataType::Date {
            return Err(SchemaError::MisplacedFormat {
                column: doc.name,
                dtype: dtype.to_string(),
            });
        }

        let column_type = match dtype {
            DataType::Integer => ColumnType::Integer,
            DataType::Float => ColumnType::Float,
            DataType::Boolean => ColumnType::Boolean,
            DataType::String => ColumnType::String { regex: doc.regex },
            DataType::Date => ColumnType::Date {
                format: doc
                    .format
                    .ok_or_else(|| SchemaError::MissingDateFormat(doc.name.clone()))?,
            },
        };

        Ok(ColumnSpec {
            name: doc.name,
            column_type,
            nullable: doc.nullable,
        })
    }
}

impl From<ColumnSpec> for ColumnDocument {
    fn from(spec: ColumnSpec) -> Self {
        let dtype = spec.dtype().to_string();
        let (regex, format) = match spec.column_type {
            ColumnType::String { regex } => (regex, None),
            ColumnType::Date { format } => (None, Some(format)),
            _ => (None, None),
        };

        ColumnDocument {
            name: spec.name,
            dtype,
            nullable: spec.nullable,
            regex,
            format,
        }
    }
}
