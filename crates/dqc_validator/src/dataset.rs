//! Table representation for validation.
//!
//! A [`Table`] holds the header order and the rows exactly as they were read.
//! Cells stay untyped text until a checker attempts coercion.

use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::HashMap;

/// A raw cell value.
///
/// Readers produce `Text` or `Null`. The typed variants exist for callers that
/// hand over a pre-loaded table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Null/missing value
    Null,
    /// Raw text as read from the source
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
}

impl CellValue {
    /// Returns true for null cells and for empty or whitespace-only text.
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Text(_) => "text",
            CellValue::Int(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Bool(_) => "boolean",
            CellValue::Date(_) => "date",
        }
    }

    /// Renders the value as text. Returns `None` for null cells.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        if self.is_null() {
            return None;
        }
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(Cow::Borrowed(s)),
            CellValue::Int(i) => Some(Cow::Owned(i.to_string())),
            CellValue::Float(f) => Some(Cow::Owned(f.to_string())),
            CellValue::Bool(b) => Some(Cow::Owned(b.to_string())),
            CellValue::Date(d) => Some(Cow::Owned(d.format("%Y-%m-%d").to_string())),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// A single row, aligned with the table's columns.
///
/// Rows may be shorter than the header; trailing cells are then absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    /// Creates a row from cells in column order.
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Returns the cell at a column position, if present.
    pub fn get(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Returns the cells in column order.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

impl FromIterator<CellValue> for Row {
    fn from_iter<T: IntoIterator<Item = CellValue>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// An ordered table of rows with a header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given header.
    ///
    /// A repeated header name resolves to its first position.
    pub fn new(columns: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(position);
        }
        Self {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// Creates a table from a header and rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut table = Self::new(columns);
        table.rows = rows;
        table
    }

    /// Creates a table of text cells, mostly useful in tests and examples.
    pub fn from_strings(columns: &[&str], rows: &[&[&str]]) -> Self {
        Self::from_rows(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|cell| CellValue::from(*cell)).collect())
                .collect(),
        )
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Returns header names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns true if the header contains `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the cell for a row and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let position = self.column_index(column)?;
        self.rows.get(row)?.get(position)
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
