//! Parser for schema documents (YAML/TOML formats).
//!
//! Turns a declarative schema document into a checked [`Schema`]. Every parse
//! function also runs the schema definition checks, so a returned schema is
//! ready for the validation engine.
//!
//! # Example
//!
//! ```rust
//! use dqc_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: customers
//! primary_key: CustomerID
//! columns:
//!   - name: CustomerID
//!     type: integer
//!     nullable: false
//!   - name: Email
//!     type: string
//!     regex: "[^@]+@[^@]+\\.[^@]+"
//! "#;
//!
//! let schema = parse_yaml(yaml).expect("Failed to parse schema");
//! assert_eq!(schema.primary_key.as_deref(), Some("CustomerID"));
//! assert_eq!(schema.columns.len(), 2);
//! ```

use dqc_core::{Schema, SchemaError};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a schema document.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// Document parsed but describes an unusable schema
    #[error("Invalid schema: {0}")]
    SchemaError(#[from] SchemaError),

    /// File I/O error
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported schema document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a schema from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Schema> {
    let schema: Schema = serde_yaml_ng::from_str(content)?;
    schema.validate()?;
    Ok(schema)
}

/// Parse a schema from a TOML string.
///
/// # Example
///
/// ```rust
/// use dqc_parser::parse_toml;
///
/// let toml = r#"
/// name = "orders"
///
/// [[columns]]
/// name = "OrderDate"
/// type = "date"
/// format = "%d/%m/%Y"
/// "#;
///
/// let schema = parse_toml(toml).unwrap();
/// assert_eq!(schema.columns[0].date_format(), Some("%d/%m/%Y"));
/// ```
pub fn parse_toml(content: &str) -> Result<Schema> {
    let schema: Schema =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    schema.validate()?;
    Ok(schema)
}

/// Detect the document format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SchemaFormat::Yaml`
/// * `.toml` → `SchemaFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        "toml" => Ok(SchemaFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema from a file with automatic format detection.
///
/// ```no_run
/// use dqc_parser::parse_file;
/// use std::path::Path;
///
/// let schema = parse_file(Path::new("schemas/customers.yml")).unwrap();
/// println!("Loaded {} columns", schema.columns.len());
/// ```
pub fn parse_file(path: &Path) -> Result<Schema> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ParserError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), ?format, "Parsing schema document");

    match format {
        SchemaFormat::Yaml => parse_yaml(&content),
        SchemaFormat::Toml => parse_toml(&content),
    }
}
