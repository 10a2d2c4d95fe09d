use anyhow::{Context, Result};
use colored::*;
use dqc_sdk::{QualityCheckOutcome, format_summary};
use serde_json::json;

pub fn print_check_report(outcome: &QualityCheckOutcome, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(outcome),
        _ => {
            print_text_report(outcome);
            Ok(())
        }
    }
}

fn print_text_report(outcome: &QualityCheckOutcome) {
    let result = &outcome.result;

    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATA QUALITY REPORT".bold());
    println!("{}", "═".repeat(60));

    if result.passed() {
        println!("\n{} {}", "✓".green().bold(), "Checks PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Checks FAILED".red().bold());
    }

    if !result.missing_columns().is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for column in result.missing_columns() {
            println!(
                "  - {}",
                format!("Column '{column}' not found in data, not checked").yellow()
            );
        }
    }

    if !result.passed() {
        println!("\n{}", "Errors:".red().bold());
        for (i, record) in result.records().iter().enumerate() {
            println!("  {}. {}", i + 1, record.to_string().red());
        }
    }

    println!();
    print!("{}", format_summary(result));
    println!("Rows validated: {}", result.rows_validated());

    for path in &outcome.reports {
        print_info(&format!("Report written: {}", path.display()));
    }
    println!("{}", "═".repeat(60));
}

fn print_json_report(outcome: &QualityCheckOutcome) -> Result<()> {
    let result = &outcome.result;
    let totals = result.totals();

    let output = json!({
        "passed": result.passed(),
        "rows_validated": result.rows_validated(),
        "missing_columns": result.missing_columns(),
        "errors": result.records(),
        "column_counts": result.column_counts(),
        "summary": {
            "datatype_errors": totals.datatype_errors,
            "duplicate_key_errors": totals.duplicate_key_errors,
            "special_char_errors": totals.special_char_errors,
            "total_errors": result.total_errors(),
        },
        "reports": outcome
            .reports
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize report")?
    );
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
