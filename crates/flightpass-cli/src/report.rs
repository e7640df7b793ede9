//! Rendering extracted documents as JSON, CSV and text.

use std::path::Path;

use serde::Serialize;

use flightpass_core::models::config::OutputConfig;
use flightpass_core::{ExtractedDocument, ExtractionStats, Field, FlightRecord};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source_file: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extraction_time: Option<String>,
    #[serde(flatten)]
    record: &'a FlightRecord,
}

pub fn format_document(
    doc: &ExtractedDocument,
    format: OutputFormat,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(doc, output),
        OutputFormat::Csv => format_csv(std::slice::from_ref(doc), output),
        OutputFormat::Text => Ok(format_text(doc)),
    }
}

fn format_json(doc: &ExtractedDocument, output: &OutputConfig) -> anyhow::Result<String> {
    let row = JsonRow {
        source_file: output.include_source.then_some(doc.source_file.as_str()),
        extraction_time: output
            .include_timestamp
            .then(|| doc.extraction_time_display()),
        record: &doc.record,
    };
    Ok(serde_json::to_string_pretty(&row)?)
}

fn header(output: &OutputConfig) -> Vec<&'static str> {
    let mut columns = Vec::with_capacity(Field::COUNT + 2);
    if output.include_source {
        columns.push("source_file");
    }
    if output.include_timestamp {
        columns.push("extraction_time");
    }
    columns.extend(Field::ALL.iter().map(|f| f.key()));
    columns
}

fn row(doc: &ExtractedDocument, output: &OutputConfig) -> Vec<String> {
    let mut values = Vec::with_capacity(Field::COUNT + 2);
    if output.include_source {
        values.push(doc.source_file.clone());
    }
    if output.include_timestamp {
        values.push(doc.extraction_time_display());
    }
    values.extend(doc.record.to_row().into_iter().map(str::to_string));
    values
}

fn write_rows<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    docs: &[ExtractedDocument],
    output: &OutputConfig,
) -> anyhow::Result<()> {
    wtr.write_record(header(output))?;
    for doc in docs {
        wtr.write_record(row(doc, output))?;
    }
    wtr.flush()?;
    Ok(())
}

fn format_csv(docs: &[ExtractedDocument], output: &OutputConfig) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    write_rows(&mut wtr, docs, output)?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Write one row per document to a CSV file.
pub fn write_records(
    path: &Path,
    docs: &[ExtractedDocument],
    output: &OutputConfig,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(&mut wtr, docs, output)
}

fn format_text(doc: &ExtractedDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!("Document: {}\n", doc.source_file));
    out.push_str(&format!("Extracted: {}\n", doc.extraction_time_display()));
    out.push('\n');

    for (field, value) in doc.record.iter() {
        out.push_str(&format!("  {:<10} {}\n", format!("{}:", field.label()), value));
    }

    out
}

/// Render aggregate statistics as aligned lines.
pub fn format_stats(stats: &ExtractionStats) -> String {
    [
        ("Total extractions", stats.total),
        ("Flight numbers found", stats.flight_numbers),
        ("Routes found", stats.routes),
        ("Passenger names found", stats.passenger_names),
        ("Airlines detected", stats.airlines),
    ]
    .iter()
    .map(|(label, count)| format!("  {label:<22} {count}"))
    .collect::<Vec<_>>()
    .join("\n")
}
