//! CSV table reader.
//!
//! Cells are kept as the raw text of the file. Coercion belongs to the engine.
//! Bytes that are not valid UTF-8 are replaced with U+FFFD, which the special
//! character scan reports, so one badly encoded cell never aborts the read.

use crate::{IoError, Result};
use dqc_validator::{CellValue, Row, Table};
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a CSV file with a header row into a [`Table`].
///
/// Empty fields become [`CellValue::Null`]. Rows shorter than the header are
/// kept as they are; their trailing cells are absent.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IoError::csv_read(path, e))?;

    let table = read_records(reader, path)?;
    debug!(
        path = %path.display(),
        columns = table.columns().len(),
        rows = table.len(),
        "Loaded CSV table"
    );
    Ok(table)
}

/// Reads CSV text from any reader. `origin` is only used in error messages.
pub fn read_csv_from<R: Read>(input: R, origin: &Path) -> Result<Table> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    read_records(reader, origin)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Table> {
    let mut repaired = 0usize;

    let headers = reader
        .byte_headers()
        .map_err(|e| IoError::csv_read(path, e))?
        .clone();
    if headers.is_empty() {
        return Err(IoError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let columns = headers
        .iter()
        .map(|field| decode(field, &mut repaired))
        .collect();
    let mut table = Table::new(columns);

    for record in reader.byte_records() {
        let record = record.map_err(|e| IoError::csv_read(path, e))?;
        let row: Row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    CellValue::Null
                } else {
                    CellValue::from(decode(field, &mut repaired))
                }
            })
            .collect();
        table.push_row(row);
    }

    if repaired > 0 {
        warn!(
            path = %path.display(),
            fields = repaired,
            "Replaced invalid UTF-8 in CSV fields"
        );
    }
    Ok(table)
}

fn decode(field: &[u8], repaired: &mut usize) -> String {
    match String::from_utf8_lossy(field) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            *repaired += 1;
            text
        }
    }
}
