//! Builder pattern for creating schemas.
//!
//! Fluent builders for assembling a [`Schema`] in code rather than loading it
//! from a schema document.

use crate::{ColumnSpec, ColumnType, Schema, SpecialCharConfig};

/// Builder for creating a `Schema`.
///
/// # Example
///
/// ```rust
/// use dqc_core::{ColumnBuilder, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .name("orders")
///     .primary_key("order_id")
///     .column(ColumnBuilder::integer("order_id").nullable(false).build())
///     .column(ColumnBuilder::float("amount").build())
///     .build();
///
/// assert_eq!(schema.primary_key.as_deref(), Some("order_id"));
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    name: Option<String>,
    primary_key: Option<String>,
    columns: Vec<ColumnSpec>,
    special_characters: Option<SpecialCharConfig>,
}

impl SchemaBuilder {
    /// Creates an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dataset name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the primary key column.
    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    /// Adds a column contract.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds multiple column contracts.
    pub fn columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Sets the special character scan configuration.
    pub fn special_characters(mut self, config: SpecialCharConfig) -> Self {
        self.special_characters = Some(config);
        self
    }

    /// Builds the schema.
    ///
    /// The result is not checked; call [`Schema::validate`] for that.
    pub fn build(self) -> Schema {
        Schema {
            name: self.name,
            primary_key: self.primary_key,
            columns: self.columns,
            special_characters: self.special_characters,
        }
    }
}

/// Builder for creating a `ColumnSpec`.
///
/// Columns are nullable unless told otherwise.
///
/// # Example
///
/// ```rust
/// use dqc_core::{ColumnBuilder, DataType};
///
/// let email = ColumnBuilder::string("email")
///     .regex(r"[^@]+@[^@]+\.[^@]+")
///     .nullable(true)
///     .build();
///
/// assert_eq!(email.dtype(), DataType::String);
/// assert!(email.regex().is_some());
/// ```
#[derive(Debug)]
pub struct ColumnBuilder {
    name: String,
    column_type: ColumnType,
    nullable: bool,
}

impl ColumnBuilder {
    /// Creates a builder for any column type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Float)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Boolean)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::String { regex: None })
    }

    pub fn date(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self::new(
            name,
            ColumnType::Date {
                format: format.into(),
            },
        )
    }

    /// Sets whether the column accepts empty cells.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the regex of a string column. Has no effect on other column types.
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        if let ColumnType::String { regex } = &mut self.column_type {
            *regex = Some(pattern.into());
        }
        self
    }

    /// Builds the column contract.
    pub fn build(self) -> ColumnSpec {
        ColumnSpec {
            name: self.name,
            column_type: self.column_type,
            nullable: self.nullable,
        }
    }
}
