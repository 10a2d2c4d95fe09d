use anyhow::{Context, Result};
use dqc_sdk::{ColumnType, load_schema};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &Path) -> Result<()> {
    info!("Loading schema: {}", schema_path.display());

    let schema = load_schema(schema_path)
        .with_context(|| format!("Failed to load schema file: {}", schema_path.display()))?;

    output::print_success("Schema is valid");

    println!("\nSchema Summary:");
    println!("  Name:        {}", schema.name.as_deref().unwrap_or("N/A"));
    println!(
        "  Primary key: {}",
        schema.primary_key.as_deref().unwrap_or("N/A")
    );
    println!("  Columns:     {}", schema.columns.len());

    println!("\nColumns:");
    for column in &schema.columns {
        let rule = match &column.column_type {
            ColumnType::String { regex: Some(pattern) } => format!(" regex={pattern}"),
            ColumnType::Date { format } => format!(" format={format}"),
            _ => String::new(),
        };
        let nullability = if column.nullable { "nullable" } else { "not null" };
        println!(
            "  - {} ({}, {}){}",
            column.name,
            column.dtype(),
            nullability,
            rule
        );
    }

    if let Some(config) = &schema.special_characters {
        let columns = config
            .columns
            .as_ref()
            .map(|c| c.join(", "))
            .unwrap_or_else(|| "all string columns".to_string());
        println!("\nSpecial Characters:");
        println!("  Columns:       {columns}");
        println!("  Denylist:      {}", config.denylist);
        println!("  Flag control:  {}", config.flag_control);
    }

    Ok(())
}
