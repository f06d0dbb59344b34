//! vntrseek - Tandem Repeat Finder
//!
//! Finds runs of a nucleotide motif repeated back to back.
//!
//! ## Usage
//!
//! ```bash
//! vntrseek sequences.fasta -m CAG -n 4
//! vntrseek sequences.fasta -f csv -o VNTR_Analysis_CAG.csv
//! cat reads.txt | vntrseek - -m AC -f json
//! vntrseek --sample
//! ```
//!
//! ## Output Formats
//!
//! - `report`: summary and per-region listing with context (default)
//! - `csv`: one row per region
//! - `json`: full results

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use vntrseek::config::{AnalysisOptions, DEFAULT_MIN_REPEATS, DEFAULT_MOTIF};
use vntrseek::engine::{analyze, summarize};
use vntrseek::export::{default_file_name, write_results, OutputFormat};
use vntrseek::fasta::{read_input, SAMPLE_FASTA};

/// Output format specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain-text summary and region listing
    Report,
    /// Comma-separated table, one row per region
    Csv,
    /// JSON document with summary and full results
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Report => OutputFormat::Report,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// vntrseek - Find tandem repeats of a motif in DNA/RNA sequences
///
/// Input may be FASTA or plain sequence letters; anything other than
/// A, C, G, T and U is ignored.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file (FASTA or plain text). Use "-" for stdin.
    #[arg(required_unless_present = "sample")]
    file: Option<PathBuf>,

    /// Analyse the built-in sample data set instead of a file
    #[arg(long = "sample", conflicts_with = "file")]
    sample: bool,

    /// Motif to search (case-insensitive)
    #[arg(short = 'm', long = "motif", default_value = DEFAULT_MOTIF)]
    motif: String,

    /// Minimum number of consecutive copies (2 to 50)
    #[arg(short = 'n', long = "min-repeats", default_value_t = DEFAULT_MIN_REPEATS)]
    min_repeats: usize,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "report")]
    format: FormatArg,

    /// Output file, or a directory to write VNTR_Analysis_<MOTIF>.<ext> into.
    /// Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp_secs();

    let level = match (quiet, verbose) {
        (true, _) => Some(LevelFilter::Error),
        (false, 0) => None,
        (false, 1) => Some(LevelFilter::Info),
        (false, 2) => Some(LevelFilter::Debug),
        (false, _) => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let options = AnalysisOptions::new(args.motif.trim(), args.min_repeats);
    options.validate().context("Invalid analysis options")?;

    let content = match &args.file {
        Some(path) => read_input(path)
            .with_context(|| format!("Cannot load {}", path.display()))?,
        None if args.sample => SAMPLE_FASTA.to_string(),
        None => anyhow::bail!("No input file given (use --sample for demo data)"),
    };

    let results = analyze(&content, &options);
    let summary = summarize(&results);
    let format: OutputFormat = args.format.into();

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_results(&mut handle, format, &results, &summary, &options.motif)?;
        handle.flush()?;
    } else {
        let mut path = PathBuf::from(&args.output);
        if path.is_dir() {
            path.push(default_file_name(&options.motif, format));
        }
        let file = File::create(&path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_results(&mut writer, format, &results, &summary, &options.motif)?;
        writer.flush()?;
        info!(
            "Wrote {} report for {} sequences to {}",
            format,
            results.len(),
            path.display()
        );
    }

    Ok(())
}
