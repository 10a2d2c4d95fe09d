//! Primary key uniqueness.

use crate::{Result, Table, ValidationError};
use dqc_core::{ErrorKind, ErrorRecord};
use std::collections::HashMap;
use tracing::debug;

/// Detects primary key values shared by more than one row.
///
/// Keys are compared by their raw text. Null keys never take part in grouping.
#[derive(Debug, Clone)]
pub struct DuplicateKeyChecker {
    primary_key: String,
}

impl DuplicateKeyChecker {
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
        }
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Emits one [`ErrorKind::DuplicateKey`] record per row whose key value is
    /// shared, in ascending row order.
    ///
    /// Fails when the key column is not in the table header.
    pub fn check(&self, table: &Table) -> Result<Vec<ErrorRecord>> {
        let position = table
            .column_index(&self.primary_key)
            .ok_or_else(|| ValidationError::missing_primary_key(&self.primary_key))?;

        let keys: Vec<Option<String>> = table
            .rows()
            .map(|row| {
                row.get(position)
                    .and_then(|cell| cell.as_text())
                    .map(|text| text.into_owned())
            })
            .collect();

        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for key in keys.iter().flatten() {
            *occurrences.entry(key.as_str()).or_insert(0) += 1;
        }

        let errors: Vec<ErrorRecord> = keys
            .iter()
            .enumerate()
            .filter_map(|(row_idx, key)| {
                let key = key.as_deref()?;
                let count = occurrences.get(key).copied().unwrap_or(0);
                (count > 1).then(|| {
                    ErrorRecord::new(
                        row_idx,
                        &self.primary_key,
                        ErrorKind::DuplicateKey,
                        format!("value '{key}' appears in {count} rows"),
                    )
                })
            })
            .collect();

        debug!(
            primary_key = %self.primary_key,
            distinct_keys = occurrences.len(),
            findings = errors.len(),
            "Duplicate key check complete"
        );
        Ok(errors)
    }
}
