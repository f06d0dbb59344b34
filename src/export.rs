//! Writers for analysis results.
//!
//! Three formats are supported:
//! - CSV: one row per region (or one placeholder row per region-less sequence)
//! - JSON: the summary and the full results, including region contexts
//! - Report: a plain-text overview for the terminal
//!
//! The motif is always written uppercase (CSV `Motif` column and default file
//! names), whatever case the caller typed, so exports match the motif stored on
//! every region.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::model::{AnalysisSummary, SequenceResult};

/// CSV header row.
pub const CSV_HEADER: &str = "Sequence,Length,Region_ID,Motif,Repeats,Start,End,Length_BP,Density_1kb";

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Report,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Report => write!(f, "report"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl OutputFormat {
    /// File extension used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Report => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Default export file name, e.g. `VNTR_Analysis_ACACA.csv`.
pub fn default_file_name(motif: &str, format: OutputFormat) -> String {
    format!("VNTR_Analysis_{}.{}", motif.to_uppercase(), format.extension())
}

/// Writes results in the requested format.
pub fn write_results<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    results: &[SequenceResult],
    summary: &AnalysisSummary,
    motif: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Report => write_report(writer, results, summary),
        OutputFormat::Csv => write_csv(writer, results, motif),
        OutputFormat::Json => write_json(writer, results, summary),
    }
}

/// Writes the CSV table. Region ids are 1-based positions within each sequence.
pub fn write_csv<W: Write>(writer: &mut W, results: &[SequenceResult], motif: &str) -> io::Result<()> {
    let motif = motif.to_uppercase();
    writeln!(writer, "{}", CSV_HEADER)?;

    for res in results {
        let name = quote(&res.name);
        if res.regions.is_empty() {
            writeln!(
                writer,
                "{},{},None,{},0,0,0,0,{:.2}",
                name, res.length, motif, res.density
            )?;
            continue;
        }
        for (idx, reg) in res.regions.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{},{:.2}",
                name,
                res.length,
                idx + 1,
                motif,
                reg.repeats,
                reg.start,
                reg.end,
                reg.length,
                res.density
            )?;
        }
    }
    Ok(())
}

/// Double-quotes a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    summary: &'a AnalysisSummary,
    results: &'a [SequenceResult],
}

/// Writes `{ "summary": ..., "results": [...] }` as pretty JSON.
pub fn write_json<W: Write>(
    writer: &mut W,
    results: &[SequenceResult],
    summary: &AnalysisSummary,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonDocument { summary, results })?;
    writeln!(writer)
}

/// Writes a human-readable report.
pub fn write_report<W: Write>(
    writer: &mut W,
    results: &[SequenceResult],
    summary: &AnalysisSummary,
) -> io::Result<()> {
    writeln!(writer, "Parsed sequences:      {}", summary.sequences)?;
    writeln!(writer, "VNTR instances:        {}", summary.total_regions)?;
    writeln!(writer, "Average repeat length: {:.1} bp", summary.average_repeat_length)?;
    writeln!(writer, "Region density:        {:.2}/kb", summary.average_density)?;

    for res in results {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} ({} bp): {} region(s), {:.2}/kb",
            res.name,
            res.length,
            res.regions.len(),
            res.density
        )?;
        for reg in &res.regions {
            writeln!(
                writer,
                "  {}-{}  {} x {}  {}[{}]{}",
                reg.start,
                reg.end,
                reg.repeats,
                reg.motif,
                reg.context.before,
                reg.context.repeat,
                reg.context.after
            )?;
        }
    }
    Ok(())
}
