//! Validation engine orchestrating the three check families.

use crate::{
    DatatypeChecker, DuplicateKeyChecker, Result, SpecialCharChecker, Table, ValidationError,
};
use dqc_core::{CheckOptions, Schema, SpecialCharConfig, ValidationResult};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs every check family over a table and merges the findings.
///
/// The engine holds only its options; each call to [`validate`](Self::validate)
/// is independent and leaves its inputs untouched.
#[derive(Debug, Clone, Default)]
pub struct QualityEngine {
    options: CheckOptions,
}

impl QualityEngine {
    /// Creates an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom options.
    pub fn with_options(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Validates a table against a schema.
    ///
    /// Findings are ordered by check family (datatype, duplicate key, special
    /// character), then by row, then by column.
    ///
    /// # Errors
    ///
    /// Returns an error when the schema definition is unusable, when the
    /// primary key column is absent from the table, or, in strict mode, when
    /// any schema column is absent from the table.
    pub fn validate(
        &self,
        schema: &Schema,
        table: &Table,
        primary_key: &str,
    ) -> Result<ValidationResult> {
        let start = Instant::now();

        info!(
            schema = schema.name.as_deref().unwrap_or("<unnamed>"),
            rows = table.len(),
            primary_key,
            "Validating table"
        );

        // Regexes are compiled once, by the datatype checker below
        schema.validate_structure()?;

        if !table.has_column(primary_key) {
            return Err(ValidationError::missing_primary_key(primary_key));
        }

        let missing_columns = self.missing_columns(schema, table)?;

        let datatype = DatatypeChecker::new(schema)?;
        let mut records = datatype.check(table);
        records.extend(DuplicateKeyChecker::new(primary_key).check(table)?);

        let config = self.special_char_config(schema);
        records.extend(SpecialCharChecker::from_schema(schema, &config).check(table));

        let result = ValidationResult::from_records(records, table.len(), missing_columns);

        let totals = result.totals();
        info!(
            datatype_errors = totals.datatype_errors,
            duplicate_key_errors = totals.duplicate_key_errors,
            special_char_errors = totals.special_char_errors,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Validation complete"
        );

        Ok(result)
    }

    fn missing_columns(&self, schema: &Schema, table: &Table) -> Result<Vec<String>> {
        let missing: Vec<String> = schema
            .column_names()
            .filter(|name| !table.has_column(name))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            return Ok(missing);
        }
        if self.options.strict {
            return Err(ValidationError::MissingColumns(missing));
        }

        warn!(
            columns = %missing.join(", "),
            "Schema columns missing from the data, skipping their checks"
        );
        Ok(missing)
    }

    /// Options take precedence over the schema document.
    fn special_char_config(&self, schema: &Schema) -> SpecialCharConfig {
        let config = self
            .options
            .special_characters
            .as_ref()
            .or(schema.special_characters.as_ref())
            .cloned()
            .unwrap_or_default();
        debug!(
            denylist = %config.denylist,
            flag_control = config.flag_control,
            "Resolved special character configuration"
        );
        config
    }
}

/// Validates `table` against `schema` with default options.
///
/// Shorthand for `QualityEngine::new().validate(schema, table, primary_key)`.
pub fn aggregate(schema: &Schema, table: &Table, primary_key: &str) -> Result<ValidationResult> {
    QualityEngine::new().validate(schema, table, primary_key)
}
