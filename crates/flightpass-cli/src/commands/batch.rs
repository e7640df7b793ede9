//! Batch processing command for multiple documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use flightpass_core::{
    ExtractedDocument, ExtractionStats, FieldExtractor, TextExtractor, load_document,
};

use super::config::load_config;
use crate::report::{OutputFormat, format_document, format_stats, write_records};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write all records to records.csv
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    document: Option<ExtractedDocument>,
    error: Option<String>,
    processing_time: Duration,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && config.input.accepts(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // One read-only extractor shared by every worker
    let extractor = Arc::new(FieldExtractor::from_config(&config.extraction)?);
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in files.into_iter().enumerate() {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let extractor = Arc::clone(&extractor);

        tasks.spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let result = load_document(&path).map(|doc| extractor.extract_document(&doc));
            (index, path, result, file_start.elapsed())
        });
    }

    let mut results = Vec::with_capacity(tasks.len());

    while let Some(joined) = tasks.join_next().await {
        let (index, path, result, processing_time) = joined?;

        match result {
            Ok(document) => {
                results.push((
                    index,
                    ProcessResult {
                        path,
                        document: Some(document),
                        error: None,
                        processing_time,
                    },
                ));
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push((
                        index,
                        ProcessResult {
                            path,
                            document: None,
                            error: Some(error_msg),
                            processing_time,
                        },
                    ));
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Report in input order
    results.sort_by_key(|(index, _)| *index);
    let results: Vec<ProcessResult> = results.into_iter().map(|(_, r)| r).collect();

    let documents: Vec<ExtractedDocument> = results
        .iter()
        .filter_map(|r| r.document.clone())
        .collect();
    let failed: Vec<&ProcessResult> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(document) = &result.document else {
                continue;
            };

            let output_path = output_path_for(output_dir, &result.path, args.format);

            let content = format_document(document, args.format, &config.output)?;
            fs::write(&output_path, content)?;
            debug!(
                "Wrote output to {} ({:?})",
                output_path.display(),
                result.processing_time
            );
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("records.csv"))
            .unwrap_or_else(|| PathBuf::from("records.csv"));

        write_records(&summary_path, &documents, &config.output)?;
        println!(
            "{} Records written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let stats = ExtractionStats::from_records(documents.iter().map(|d| &d.record));

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(documents.len()).green(),
        style(failed.len()).red()
    );
    println!();
    println!("{}", format_stats(&stats));

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Output file for one input document.
///
/// Keeps the input's extension so `trip.txt` and `trip.eml` get separate
/// outputs (`trip.txt.json`, `trip.eml.json`).
fn output_path_for(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    output_dir.join(format!("{}.{}", name, format.extension()))
}
