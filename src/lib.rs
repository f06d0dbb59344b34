//! # vntrseek - Tandem Repeat Finder
//!
//! Locates variable number tandem repeats (VNTRs) of a nucleotide motif in
//! FASTA or plain-text sequences.
//!
//! ## Architecture
//!
//! The analysis is a pure pipeline from text to results:
//! - `normalize`: Uppercasing and alphabet filtering (A, C, G, T, U)
//! - `fasta`: FASTA-aware parsing into named records, input loading
//! - `repeats`: Maximal, non-overlapping motif run detection
//! - `engine`: Orchestration, per-sequence density and aggregate summary
//! - `model`: Records, regions and results
//! - `config`: Analysis options and their validation
//! - `ids`: Unique opaque identifiers
//! - `export`: CSV, JSON and text report writers
//!
//! ## Example
//!
//! ```
//! use vntrseek::{analyze, AnalysisOptions};
//!
//! let results = analyze("TTTTTTTT", &AnalysisOptions::new("T", 5));
//! let region = &results[0].regions[0];
//! assert_eq!((region.start, region.end, region.repeats), (1, 8, 8));
//! ```

pub mod config;
pub mod engine;
pub mod export;
pub mod fasta;
pub mod ids;
pub mod model;
pub mod normalize;
pub mod repeats;

pub use config::AnalysisOptions;
pub use engine::{analyze, summarize};
pub use model::{AnalysisSummary, RepeatRegion, SequenceResult};
