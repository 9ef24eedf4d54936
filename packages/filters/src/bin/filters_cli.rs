//! CLI for running the presentation filters outside the page templates
//!
//! Useful for previewing derived summaries over exported dataset records.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use filters_core::{
    format_file_size, org_type_display, sorted_by_display, update_frequency_cell, Record,
    SummaryConfig, SummaryExtractor, SummaryPhase,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "filters_cli")]
#[command(about = "Run dataset presentation filters from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive display summaries for JSON records (array or single object)
    Summary {
        /// Read records from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Emit a JSON array instead of one summary per line
        #[arg(long)]
        json: bool,
    },

    /// Format a download size
    Size {
        bytes: u64,
        #[arg(long, default_value = "")]
        format: String,
    },

    /// Label for a sort-order code
    SortedBy { code: String },

    /// Label for a list of organisation-type codes
    OrgTypes {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Render the "last updated" table cell
    UpdateCell { date: String, frequency: String },
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct SummaryOutput {
    summary: String,
    phase: &'static str,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,filters_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { input, json } => cmd_summary(input, json),
        Commands::Size { bytes, format } => {
            println!("{}", format_file_size(bytes, &format));
            Ok(())
        }
        Commands::SortedBy { code } => cmd_sorted_by(&code),
        Commands::OrgTypes { codes } => {
            println!("{}", org_type_display(&codes));
            Ok(())
        }
        Commands::UpdateCell { date, frequency } => {
            println!("{}", update_frequency_cell(&date, &frequency));
            Ok(())
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_summary(input: Option<PathBuf>, json: bool) -> Result<()> {
    let config = SummaryConfig::from_env().context("Failed to load summary configuration")?;
    tracing::debug!(
        cutover = %config.cutover_date,
        pivot = config.pivot,
        window = config.window,
        "Summary configuration loaded"
    );

    let raw = read_input(input.as_ref())?;
    let records = Record::many_from_json(&raw).context("Failed to parse records")?;
    tracing::info!("Extracting summaries for {} records", records.len());

    let extractor = SummaryExtractor::new(config);
    let outputs: Vec<SummaryOutput> = records
        .iter()
        .map(|record| {
            let (summary, phase): (String, SummaryPhase) = extractor.extract_with_phase(record);
            SummaryOutput {
                summary,
                phase: phase.as_str(),
            }
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outputs).context("Failed to encode summaries")?
        );
    } else {
        for output in outputs {
            println!("{}", output.summary);
        }
    }

    Ok(())
}

fn cmd_sorted_by(code: &str) -> Result<()> {
    match sorted_by_display(code) {
        Some(label) => {
            println!("{}", label);
            Ok(())
        }
        None => bail!("Unknown sort order '{}'", code),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
