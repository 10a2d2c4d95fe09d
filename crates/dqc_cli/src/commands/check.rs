use anyhow::{Context, Result, anyhow};
use dqc_sdk::{CheckOptions, DataSource, ReportOptions, load_schema, run_quality_check};
use std::path::PathBuf;
use tracing::info;

use crate::output;

pub struct CheckArgs {
    pub data: PathBuf,
    pub schema: PathBuf,
    pub primary_key: Option<String>,
    pub csv_report: bool,
    pub pdf_report: bool,
    pub output_dir: PathBuf,
    pub strict: bool,
    pub format: String,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking data file: {}", args.data.display());
    info!("Strict mode: {}", args.strict);

    let schema = load_schema(&args.schema)
        .with_context(|| format!("Failed to load schema file: {}", args.schema.display()))?;

    let primary_key = args
        .primary_key
        .or_else(|| schema.primary_key.clone())
        .ok_or_else(|| {
            anyhow!("No primary key given: pass --primary-key or set primary_key in the schema")
        })?;

    let checks = CheckOptions::new().with_strict(args.strict);
    let reports = ReportOptions::new()
        .with_csv_report(args.csv_report)
        .with_pdf_report(args.pdf_report)
        .with_output_dir(&args.output_dir);

    let outcome = run_quality_check(
        DataSource::Path(args.data.clone()),
        &schema,
        &primary_key,
        &checks,
        &reports,
    )
    .with_context(|| format!("Failed to check data file: {}", args.data.display()))?;

    output::print_check_report(&outcome, &args.format)?;

    if !outcome.result.passed() {
        std::process::exit(1);
    }

    Ok(())
}
