//! FASTA-aware input parser.
//!
//! This module splits raw input text into named records. Text that does not
//! start with a `>` header is treated as a single plain sequence.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Sequence lines are concatenated and normalized (see [`crate::normalize`]),
//! so lowercase letters, gaps, digits and ambiguous bases never reach the
//! repeat locator.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::model::SequenceRecord;
use crate::normalize::normalize;

/// Name given to input without any FASTA header.
pub const PLAIN_NAME: &str = "User Sequence";
/// Header given to input without any FASTA header.
pub const PLAIN_HEADER: &str = "Plain Text Input";
/// Header used when a `>` line carries no text.
pub const UNNAMED_HEADER: &str = "Unnamed Sequence";

/// Built-in demonstration data set.
pub const SAMPLE_FASTA: &str = "\
>chr_demo_1 synthetic locus with an ACACA array
GATTCGATCGGCTAGCTTACACAACACAACACAACACAACACAGGTCAATCGGATCCATG
CTAGGCTTAGCATCGACTGACTAGCTAGCAACACAACACAACACATTAGCGATCGGCAT
>chr_demo_2 two short arrays separated by unique sequence
TTGACCATGACGTACACAACACAACACATGCATCGATCGTAGCTAGCTGATCGATCGTA
GCATGCACACAACACAACACAACACAACACAACACAGGATCCTAGGCATCGATTTAGCG
>chr_demo_3 no repeats of the default motif
ATGCGTACGTTAGCATCGGATCGATCGTAGCTAGGCTAACGTAGCTAGCATCGATCGATG
";

/// Errors that can occur while loading input.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] io::Error),

    #[error("Input contains no sequence data")]
    EmptyInput,
}

/// Result type for input loading.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses FASTA or plain-sequence text into records.
///
/// Never fails. Empty text gives a single plain record with an empty
/// sequence; FASTA records whose sequence normalizes to nothing are kept.
///
/// # Examples
///
/// ```
/// use vntrseek::fasta::parse;
///
/// let records = parse(">seq1 demo\nacgt\nACGT\n");
/// assert_eq!(records[0].name, "seq1");
/// assert_eq!(records[0].sequence, "ACGTACGT");
/// ```
pub fn parse(text: &str) -> Vec<SequenceRecord> {
    let trimmed = text.trim();

    if !trimmed.starts_with('>') {
        return vec![SequenceRecord::new(PLAIN_NAME, PLAIN_HEADER, normalize(text))];
    }

    let mut records = Vec::new();
    let mut current: Option<(&str, String)> = None;

    for line in trimmed.lines() {
        if let Some(header) = line.strip_prefix('>') {
            if let Some((header, raw)) = current.take() {
                push_record(&mut records, header, &raw);
            }
            current = Some((header, String::new()));
        } else if let Some((_, ref mut raw)) = current {
            raw.push_str(line);
        }
    }

    // Don't forget the last record
    if let Some((header, raw)) = current {
        push_record(&mut records, header, &raw);
    }

    records
}

/// Builds a record from a header and its raw sequence lines, skipping blank chunks.
fn push_record(records: &mut Vec<SequenceRecord>, header: &str, raw: &str) {
    if header.trim().is_empty() && raw.trim().is_empty() {
        return;
    }

    let header = if header.is_empty() { UNNAMED_HEADER } else { header };
    let name = header.split_whitespace().next().unwrap_or("");
    records.push(SequenceRecord::new(name, header, normalize(raw)));
}

/// Reads the whole input from a file, or from standard input when `path` is `-`.
pub fn read_input<P: AsRef<Path>>(path: P) -> FastaResult<String> {
    let path = path.as_ref();
    let mut content = String::new();

    if path.as_os_str() == "-" {
        io::stdin().lock().read_to_string(&mut content)?;
    } else {
        let file = File::open(path)?;
        let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
        content.reserve(size);
        BufReader::new(file).read_to_string(&mut content)?;
    }

    if content.trim().is_empty() {
        return Err(FastaError::EmptyInput);
    }
    Ok(content)
}
