//! # Data Quality Check I/O
//!
//! The collaborators around the validation engine:
//!
//! - [`read_csv_table`]: CSV file to [`Table`](dqc_validator::Table), raw text cells
//! - [`write_csv_reports`]: error ledger and totals as CSV
//! - [`write_pdf_report`]: paginated, human-readable PDF
//! - [`format_summary`]: console summary
//!
//! None of these make decisions about the data; they only move it.

mod csv_report;
mod error;
mod pdf_report;
mod reader;
mod summary;

pub use csv_report::*;
pub use error::*;
pub use pdf_report::*;
pub use reader::*;
pub use summary::*;

use std::path::Path;

pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| IoError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
