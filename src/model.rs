//! Data model for repeat analysis.
//!
//! This module contains the data structures produced by one analysis run:
//! - Parsed sequence records
//! - Repeat regions and their local context
//! - Per-sequence results and the aggregate summary
//!
//! Everything is created fresh by [`crate::engine::analyze`] and owned by the
//! returned vector; nothing is mutated after construction.

use serde::Serialize;

/// Number of flanking bases kept on each side of a repeat region.
pub const CONTEXT_FLANK: usize = 20;

/// A parsed input record with its normalized sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Short identifier (first token of the header)
    pub name: String,
    /// Full header line, without the leading '>'
    pub header: String,
    /// Normalized sequence (A, C, G, T, U only)
    pub sequence: String,
}

impl SequenceRecord {
    /// Creates a new record.
    pub fn new(
        name: impl Into<String>,
        header: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// The bases around a repeat region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RepeatContext {
    /// Up to [`CONTEXT_FLANK`] bases immediately before the run
    pub before: String,
    /// The matched run itself
    pub repeat: String,
    /// Up to [`CONTEXT_FLANK`] bases immediately after the run
    pub after: String,
}

/// A maximal run of consecutive motif copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatRegion {
    pub id: String,
    /// 1-based, inclusive
    pub start: usize,
    /// 1-based, inclusive
    pub end: usize,
    /// Number of motif copies in the run
    pub repeats: usize,
    /// Run length in bases (`repeats * motif.len()`)
    pub length: usize,
    /// Uppercase motif that produced the match
    pub motif: String,
    pub context: RepeatContext,
}

impl RepeatRegion {
    /// Returns true if the two regions share at least one base.
    pub fn overlaps(&self, other: &RepeatRegion) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Analysis result for one input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResult {
    pub id: String,
    pub name: String,
    pub original_header: String,
    pub sequence: String,
    pub length: usize,
    /// Regions sorted by ascending start, never overlapping
    pub regions: Vec<RepeatRegion>,
    /// Regions per 1000 bases
    pub density: f64,
}

impl SequenceResult {
    /// Returns the number of regions found in this sequence.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns the number of bases covered by repeat regions.
    pub fn covered_bases(&self) -> usize {
        self.regions.iter().map(|r| r.length).sum()
    }
}

/// Regions per 1000 bases; zero for an empty sequence.
pub fn density(region_count: usize, sequence_length: usize) -> f64 {
    if sequence_length == 0 {
        return 0.0;
    }
    region_count as f64 / sequence_length as f64 * 1000.0
}

/// Aggregate figures over all sequences of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Number of parsed sequences
    pub sequences: usize,
    /// Number of repeat regions over all sequences
    pub total_regions: usize,
    /// Mean region length in bases
    pub average_repeat_length: f64,
    /// Mean of the per-sequence densities
    pub average_density: f64,
}
