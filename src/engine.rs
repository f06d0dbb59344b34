//! Analysis pipeline.
//!
//! [`analyze`] parses the input, runs the repeat locator on every record and
//! computes the per-sequence density. It holds no state between calls, so
//! independent analyses can run on separate threads without coordination.

use log::{debug, info};

use crate::config::AnalysisOptions;
use crate::fasta::parse;
use crate::ids::{IdGenerator, SEQUENCE_PREFIX};
use crate::model::{density, AnalysisSummary, SequenceResult};
use crate::repeats::find_regions_with;

/// Runs the full analysis on raw FASTA or plain-sequence text.
///
/// One result is returned per parsed record, in input order. Options are not
/// validated here; see [`AnalysisOptions::validate`].
///
/// # Examples
///
/// ```
/// use vntrseek::config::AnalysisOptions;
/// use vntrseek::engine::analyze;
///
/// let results = analyze(">seq1\nAAAA\n>seq2\nGGGGGG", &AnalysisOptions::new("a", 2));
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].regions[0].repeats, 4);
/// assert!(results[1].regions.is_empty());
/// ```
pub fn analyze(input: &str, options: &AnalysisOptions) -> Vec<SequenceResult> {
    analyze_with(input, options, &mut IdGenerator::new())
}

/// Same as [`analyze`], drawing identifiers from `ids`.
pub fn analyze_with(
    input: &str,
    options: &AnalysisOptions,
    ids: &mut IdGenerator,
) -> Vec<SequenceResult> {
    let motif = options.motif.to_uppercase();
    let records = parse(input);
    debug!(
        "Parsed {} record(s); searching {} x >= {}",
        records.len(),
        motif,
        options.min_repeats
    );

    let results: Vec<SequenceResult> = records
        .into_iter()
        .map(|record| {
            let regions = find_regions_with(&record.sequence, &motif, options.min_repeats, ids);
            let length = record.len();
            debug!("{}: {} bp, {} region(s)", record.name, length, regions.len());

            SequenceResult {
                id: ids.next_id(SEQUENCE_PREFIX),
                density: density(regions.len(), length),
                name: record.name,
                original_header: record.header,
                sequence: record.sequence,
                length,
                regions,
            }
        })
        .collect();

    info!(
        "Analyzed {} sequence(s), {} region(s) found",
        results.len(),
        results.iter().map(SequenceResult::region_count).sum::<usize>()
    );
    results
}

/// Computes the aggregate figures over all results.
pub fn summarize(results: &[SequenceResult]) -> AnalysisSummary {
    let total_regions: usize = results.iter().map(SequenceResult::region_count).sum();
    let total_length: usize = results.iter().map(SequenceResult::covered_bases).sum();

    let average_density = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.density).sum::<f64>() / results.len() as f64
    };

    AnalysisSummary {
        sequences: results.len(),
        total_regions,
        average_repeat_length: total_length as f64 / total_regions.max(1) as f64,
        average_density,
    }
}
