//! Type and format checks.
//!
//! For every row and every schema column present in the table, a cell passes
//! through three stages:
//! - Null: empty cells fail non-nullable columns and are otherwise accepted as is
//! - Type: the cell must coerce to the column's dtype
//! - Regex: string columns with a pattern must match it in full
//!
//! A cell yields at most one finding; a type failure skips the regex stage.

use crate::{CellValue, Table, coerce};
use dqc_core::{ColumnSpec, ErrorKind, ErrorRecord, Schema, SchemaError};
use regex::Regex;
use tracing::debug;

struct CompiledColumn<'a> {
    spec: &'a ColumnSpec,
    regex: Option<Regex>,
}

/// Validates cells against their column's dtype, nullability and regex.
pub struct DatatypeChecker<'a> {
    columns: Vec<CompiledColumn<'a>>,
}

impl<'a> DatatypeChecker<'a> {
    /// Prepares the checker, compiling every column regex once.
    ///
    /// This is where an uncompilable regex surfaces during validation;
    /// [`Schema::validate_structure`] leaves regexes alone.
    pub fn new(schema: &'a Schema) -> Result<Self, SchemaError> {
        let columns = schema
            .columns
            .iter()
            .map(|spec| {
                Ok(CompiledColumn {
                    spec,
                    regex: spec.compile_regex()?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self { columns })
    }

    /// Checks every row of the table.
    ///
    /// Findings are ordered by row, then by schema column order. Schema columns
    /// absent from the table header are skipped.
    pub fn check(&self, table: &Table) -> Vec<ErrorRecord> {
        let present: Vec<(usize, &CompiledColumn<'a>)> = self
            .columns
            .iter()
            .filter_map(|column| {
                table
                    .column_index(&column.spec.name)
                    .map(|position| (position, column))
            })
            .collect();

        let mut errors = Vec::new();
        for (row_idx, row) in table.rows().enumerate() {
            for (position, column) in &present {
                if let Some(err) = self.check_cell(column, row.get(*position), row_idx) {
                    errors.push(err);
                }
            }
        }

        debug!(
            rows = table.len(),
            columns = present.len(),
            findings = errors.len(),
            "Datatype checks complete"
        );
        errors
    }

    fn check_cell(
        &self,
        column: &CompiledColumn<'_>,
        cell: Option<&CellValue>,
        row_idx: usize,
    ) -> Option<ErrorRecord> {
        let spec = column.spec;

        // Absent trailing cells count as null
        let cell = match cell {
            Some(cell) if !cell.is_null() => cell,
            _ => {
                if spec.nullable {
                    return None;
                }
                return Some(ErrorRecord::new(
                    row_idx,
                    &spec.name,
                    ErrorKind::NullValue,
                    "expected non-null value, found null",
                ));
            }
        };

        if let Err(err) = coerce(cell, &spec.column_type) {
            return Some(ErrorRecord::new(
                row_idx,
                &spec.name,
                ErrorKind::DatatypeMismatch,
                err.to_string(),
            ));
        }

        let regex = column.regex.as_ref()?;
        let text = cell.as_text()?;
        if regex.is_match(&text) {
            return None;
        }

        Some(ErrorRecord::new(
            row_idx,
            &spec.name,
            ErrorKind::RegexMismatch,
            format!(
                "'{}' does not match pattern '{}'",
                text,
                spec.regex().unwrap_or_default()
            ),
        ))
    }
}
