//! Analysis configuration.
//!
//! The engine accepts any options; [`AnalysisOptions::validate`] is meant to be
//! called at the boundary (the CLI) before an analysis is started.

use thiserror::Error;

use crate::normalize::is_nucleotide;

/// Motif searched when none is given.
pub const DEFAULT_MOTIF: &str = "ACACA";
/// Minimum number of consecutive copies when none is given.
pub const DEFAULT_MIN_REPEATS: usize = 3;
/// Smallest accepted minimum repeat count.
pub const MIN_REPEATS_FLOOR: usize = 2;
/// Largest accepted minimum repeat count.
pub const MIN_REPEATS_CEILING: usize = 50;

/// Errors raised by option validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Motif is empty")]
    EmptyMotif,

    #[error("Invalid character '{ch}' in motif {motif:?} (allowed: A, C, G, T, U)")]
    InvalidMotif { motif: String, ch: char },

    #[error("Minimum repeats must be at least 2 (got {0})")]
    MinRepeatsTooLow(usize),

    #[error("Minimum repeats must be at most 50 (got {0})")]
    MinRepeatsTooHigh(usize),
}

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Motif to search (any case)
    pub motif: String,
    /// Minimum number of consecutive copies for a region
    pub min_repeats: usize,
}

impl AnalysisOptions {
    /// Creates options from a motif and a minimum repeat count.
    pub fn new(motif: impl Into<String>, min_repeats: usize) -> Self {
        Self {
            motif: motif.into(),
            min_repeats,
        }
    }

    /// Checks that the motif is a non-empty nucleotide string and that the
    /// minimum repeat count lies in `2..=50`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let motif = self.motif.trim();
        if motif.is_empty() {
            return Err(ConfigError::EmptyMotif);
        }
        if let Some(ch) = motif
            .chars()
            .find(|c| !c.is_ascii() || !is_nucleotide(c.to_ascii_uppercase() as u8))
        {
            return Err(ConfigError::InvalidMotif {
                motif: self.motif.clone(),
                ch,
            });
        }
        if self.min_repeats < MIN_REPEATS_FLOOR {
            return Err(ConfigError::MinRepeatsTooLow(self.min_repeats));
        }
        if self.min_repeats > MIN_REPEATS_CEILING {
            return Err(ConfigError::MinRepeatsTooHigh(self.min_repeats));
        }
        Ok(())
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MOTIF, DEFAULT_MIN_REPEATS)
    }
}
