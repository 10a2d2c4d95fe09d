//! # Data Quality Validator
//!
//! Validation engine for tabular data. Given a [`Schema`](dqc_core::Schema) and a
//! [`Table`], three independent check families classify every cell and row:
//!
//! - Datatype: nullability, dtype coercion, regex conformance
//! - Duplicate key: repeated primary key values
//! - Special character: disallowed characters in string columns
//!
//! The engine is a pure function of its inputs. It performs no I/O and keeps no
//! state between runs.
//!
//! ## Example
//!
//! ```rust
//! use dqc_core::{ColumnBuilder, ErrorKind, SchemaBuilder};
//! use dqc_validator::{aggregate, Table};
//!
//! let schema = SchemaBuilder::new()
//!     .column(ColumnBuilder::integer("CustomerID").nullable(false).build())
//!     .build();
//! let table = Table::from_strings(&["CustomerID"], &[&["1"], &["1"], &["abc"]]);
//!
//! let result = aggregate(&schema, &table, "CustomerID").unwrap();
//!
//! assert_eq!(result.totals().duplicate_key_errors, 2);
//! assert_eq!(result.records_of(ErrorKind::DatatypeMismatch).count(), 1);
//! ```

mod coerce;
mod datatype;
mod dataset;
mod duplicates;
mod engine;
mod error;
mod special_chars;

pub use coerce::*;
pub use datatype::*;
pub use dataset::*;
pub use duplicates::*;
pub use engine::*;
pub use error::*;
pub use special_chars::*;
