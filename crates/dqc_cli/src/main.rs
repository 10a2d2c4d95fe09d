mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dqc")]
#[command(version, about = "Data quality checks for CSV datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV file against a schema document
    Check {
        /// Path to the CSV data file
        data: PathBuf,

        /// Path to the schema document (YAML or TOML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Primary key column (overrides the schema's primary_key)
        #[arg(short = 'k', long)]
        primary_key: Option<String>,

        /// Write validation_errors.csv and validation_summary.csv
        #[arg(long)]
        csv_report: bool,

        /// Write validation_report.pdf
        #[arg(long)]
        pdf_report: bool,

        /// Directory for report files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Fail when a schema column is missing from the data
        #[arg(long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Load a schema document and print its columns
    Schema {
        /// Path to the schema document (YAML or TOML)
        schema: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Check {
            data,
            schema,
            primary_key,
            csv_report,
            pdf_report,
            output_dir,
            strict,
            format,
        } => commands::check::execute(commands::check::CheckArgs {
            data,
            schema,
            primary_key,
            csv_report,
            pdf_report,
            output_dir,
            strict,
            format,
        }),

        Commands::Schema { schema } => commands::schema::execute(&schema),
    }
}
