//! Process command - extract a record from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use flightpass_core::{Field, FieldExtractor, TextExtractor, load_document};

use super::config::load_config;
use crate::report::{OutputFormat, format_document};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (.txt OCR output or .eml message)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show which candidate pattern resolved each field
    #[arg(long)]
    explain: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let extractor = FieldExtractor::from_config(&config.extraction)?;
    let document = load_document(&args.input)?;
    let extracted = extractor.extract_document(&document);

    let output = format_document(&extracted, args.format, &config.output)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.explain {
        let matches = extractor.explain(&document.text);
        eprintln!();
        for field in Field::ALL.into_iter().filter(|f| *f != Field::Airline) {
            match matches.iter().find(|m| m.field == field) {
                Some(m) => eprintln!(
                    "{} {:<15} pattern #{} matched {:?} at {}..{}",
                    style("ℹ").blue(),
                    field.key(),
                    m.pattern_index + 1,
                    m.source,
                    m.position.0,
                    m.position.1
                ),
                None => eprintln!(
                    "{} {:<15} no candidate matched",
                    style("ℹ").yellow(),
                    field.key()
                ),
            }
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
