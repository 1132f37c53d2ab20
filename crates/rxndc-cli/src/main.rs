//! rxndc command-line interface.
//!
//! Resolves a drug name or an ATC therapeutic class name into National Drug
//! Code records and prints a table or writes a CSV file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rxndc_core::export::{render_table, write_csv};
use rxndc_core::{ClassResolver, DrugResolver, PharmaClient};
use tracing::Level;

#[derive(Parser)]
#[command(name = "rxndc")]
#[command(about = "Resolve drug or ATC class names to National Drug Codes", long_about = None)]
struct Cli {
    /// ATC therapeutic class name to resolve (levels 1-4)
    #[arg(long = "atc-class", value_name = "NAME", conflicts_with = "drug")]
    atc_class: Option<String>,

    /// Generic or brand drug name to resolve
    #[arg(long, value_name = "NAME")]
    drug: Option<String>,

    /// Write results as CSV to this path instead of printing a table
    #[arg(long = "csv-out", value_name = "PATH")]
    csv_out: Option<PathBuf>,

    /// Suppress per-request progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = PharmaClient::new(cli.quiet).context("Failed to create HTTP client")?;

    let records = if let Some(drug) = &cli.drug {
        DrugResolver::new(&client)
            .resolve(drug)
            .with_context(|| format!("Failed to resolve drug '{drug}'"))?
    } else if let Some(class) = &cli.atc_class {
        ClassResolver::new(&client)
            .resolve(class)
            .with_context(|| format!("Failed to resolve ATC class '{class}'"))?
    } else {
        Vec::new()
    };

    if records.is_empty() {
        println!("No concepts identified; nothing to report.");
        return Ok(());
    }

    match &cli.csv_out {
        Some(path) => {
            write_csv(&records, path)
                .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
            println!("Wrote {} record(s) to {}", records.len(), path.display());
        }
        None => print!("{}", render_table(&records)),
    }

    Ok(())
}
