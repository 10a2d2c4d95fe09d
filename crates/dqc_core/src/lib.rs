//! # Data Quality Check Core
//!
//! Core data structures for the data quality checker.
//!
//! This crate describes *what* a dataset is expected to look like and *what* was
//! found when it was checked. It performs no I/O and runs no checks itself; the
//! validation engine lives in `dqc_validator`.
//!
//! ## Key Concepts
//!
//! - **Schema**: Ordered list of column contracts plus an optional primary key
//! - **ColumnSpec**: Per-column dtype, nullability, regex (strings) and date format (dates)
//! - **ErrorRecord**: One atomic finding tied to a row and a column
//! - **ValidationResult**: The ordered error ledger with per-column and grand totals
//!
//! ## Example
//!
//! ```rust
//! use dqc_core::{ColumnBuilder, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new()
//!     .name("customers")
//!     .primary_key("CustomerID")
//!     .column(ColumnBuilder::integer("CustomerID").nullable(false).build())
//!     .column(
//!         ColumnBuilder::string("Email")
//!             .regex(r"[^@]+@[^@]+\.[^@]+")
//!             .build(),
//!     )
//!     .column(ColumnBuilder::date("SignupDate", "%Y-%m-%d").build())
//!     .build();
//!
//! assert!(schema.validate().is_ok());
//! assert_eq!(schema.columns.len(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod options;
pub mod result;
pub mod schema;

pub use builder::*;
pub use error::*;
pub use options::*;
pub use result::*;
pub use schema::*;
