//! Tandem repeat locator.
//!
//! Finds maximal runs of a motif repeated back to back, scanning left to
//! right. Once a run of at least `min_repeats` copies starts, every following
//! exact copy is consumed and scanning resumes right after the run, so
//! reported regions never overlap and come out sorted by start.
//!
//! The scan walks indices directly instead of compiling a `(MOTIF){n,}`
//! pattern, which keeps it linear in practice on long homopolymer stretches.

use log::trace;

use crate::ids::{IdGenerator, REGION_PREFIX};
use crate::model::{RepeatContext, RepeatRegion, CONTEXT_FLANK};

/// Finds all repeat regions of `motif` in `sequence`.
///
/// Returns an empty vector when the motif is empty or the sequence is too
/// short to hold `min_repeats` copies.
///
/// # Examples
///
/// ```
/// use vntrseek::repeats::find_regions;
///
/// let regions = find_regions("GGACAACAACAGG", "aca", 3);
/// assert_eq!(regions.len(), 1);
/// assert_eq!((regions[0].start, regions[0].end), (3, 11));
/// assert_eq!(regions[0].motif, "ACA");
/// ```
pub fn find_regions(sequence: &str, motif: &str, min_repeats: usize) -> Vec<RepeatRegion> {
    find_regions_with(sequence, motif, min_repeats, &mut IdGenerator::new())
}

/// Same as [`find_regions`], drawing region identifiers from `ids`.
pub fn find_regions_with(
    sequence: &str,
    motif: &str,
    min_repeats: usize,
    ids: &mut IdGenerator,
) -> Vec<RepeatRegion> {
    let seq = sequence.as_bytes();
    let pat = motif.as_bytes();
    let m = pat.len();
    let min_repeats = min_repeats.max(1);

    let mut regions: Vec<RepeatRegion> = Vec::new();
    let min_len = match m.checked_mul(min_repeats) {
        Some(min_len) if m > 0 && min_len <= seq.len() => min_len,
        _ => return regions,
    };

    let motif_upper = motif.to_ascii_uppercase();
    let mut pos = 0;

    while pos + min_len <= seq.len() {
        let copies = count_copies(seq, pat, pos);
        if copies < min_repeats {
            pos += 1;
            continue;
        }

        let length = copies * m;
        let end = pos + length;
        trace!("run of {} x {} at offset {}", copies, motif_upper, pos);

        let region = RepeatRegion {
            id: ids.next_id(REGION_PREFIX),
            start: pos + 1,
            end,
            repeats: copies,
            length,
            motif: motif_upper.clone(),
            context: RepeatContext {
                before: upper(&seq[pos.saturating_sub(CONTEXT_FLANK)..pos]),
                repeat: upper(&seq[pos..end]),
                after: upper(&seq[end..(end + CONTEXT_FLANK).min(seq.len())]),
            },
        };
        debug_assert!(regions.last().map_or(true, |prev| !prev.overlaps(&region)));
        regions.push(region);

        // Resume strictly after the run
        pos = end;
    }

    regions
}

/// Counts consecutive copies of `pat` starting at `pos` (ASCII case-insensitive).
fn count_copies(seq: &[u8], pat: &[u8], pos: usize) -> usize {
    seq[pos..]
        .chunks_exact(pat.len())
        .take_while(|chunk| chunk.eq_ignore_ascii_case(pat))
        .count()
}

fn upper(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// (start, end, repeats, length) of every region.
    fn coords(regions: &[RepeatRegion]) -> Vec<(usize, usize, usize, usize)> {
        regions
            .iter()
            .map(|r| (r.start, r.end, r.repeats, r.length))
            .collect()
    }

    #[rstest]
    #[case::three_copies("ACAACAACA", "ACA", 3, vec![(1, 9, 3, 9)])]
    #[case::overlapping_copies_do_not_count("ACACACACA", "ACA", 3, vec![])]
    #[case::homopolymer("TTTTTTTT", "T", 5, vec![(1, 8, 8, 8)])]
    #[case::below_threshold("ACAACAGG", "ACA", 3, vec![])]
    #[case::motif_longer_than_sequence("ACG", "ACGTACGT", 2, vec![])]
    #[case::too_short_for_threshold("ACAACA", "ACA", 3, vec![])]
    #[case::two_runs("CAGCAGCAGTTTCAGCAGCAGCAG", "CAG", 3, vec![(1, 9, 3, 9), (13, 24, 4, 12)])]
    #[case::run_in_middle("GGGACACAGGG", "AC", 2, vec![(4, 7, 2, 4)])]
    #[case::lowercase_input("acacac", "AC", 3, vec![(1, 6, 3, 6)])]
    #[case::no_match("GGGGGG", "A", 2, vec![])]
    #[case::threshold_overflows_length("ACACAC", "AC", usize::MAX / 2 + 1, vec![])]
    #[case::huge_threshold("ACACAC", "AC", usize::MAX, vec![])]
    fn test_find_regions(
        #[case] sequence: &str,
        #[case] motif: &str,
        #[case] min_repeats: usize,
        #[case] expected: Vec<(usize, usize, usize, usize)>,
    ) {
        let regions = find_regions(sequence, motif, min_repeats);
        assert_eq!(coords(&regions), expected);
    }

    #[test]
    fn test_empty_motif() {
        assert!(find_regions("AAAAAA", "", 2).is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        assert!(find_regions("", "A", 2).is_empty());
    }

    #[test]
    fn test_motif_is_uppercased() {
        let regions = find_regions("ACACAC", "ac", 2);
        assert_eq!(regions[0].motif, "AC");
        assert_eq!(regions[0].context.repeat, "ACACAC");
    }

    #[test]
    fn test_context_is_clamped() {
        let regions = find_regions("GGAAAAGG", "A", 2);

        assert_eq!(regions.len(), 1);
        let ctx = &regions[0].context;
        assert_eq!(ctx.before, "GG");
        assert_eq!(ctx.repeat, "AAAA");
        assert_eq!(ctx.after, "GG");
    }

    #[test]
    fn test_context_is_twenty_bases() {
        let flank = "C".repeat(30);
        let sequence = format!("{}TTTT{}", flank, flank);
        let regions = find_regions(&sequence, "T", 3);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 31);
        assert_eq!(regions[0].context.before, "C".repeat(20));
        assert_eq!(regions[0].context.after, "C".repeat(20));
    }

    #[test]
    fn test_resumes_after_previous_run() {
        // A run starting one base into the first region is never reported.
        let regions = find_regions("AAAAAAA", "AA", 2);
        assert_eq!(coords(&regions), vec![(1, 6, 3, 6)]);
    }

    #[test]
    fn test_leftmost_phase_wins() {
        // The run starts at the first offset holding a full copy.
        let regions = find_regions("ATATATAT", "TA", 2);
        assert_eq!(coords(&regions), vec![(2, 7, 3, 6)]);
    }

    #[test]
    fn test_min_repeats_zero_behaves_as_one() {
        let regions = find_regions("GAG", "A", 0);
        assert_eq!(coords(&regions), vec![(2, 2, 1, 1)]);
    }

    #[test]
    fn test_region_ids_are_unique() {
        let regions = find_regions("AAGAAGAAGAA", "A", 2);
        assert_eq!(regions.len(), 4);
        let mut ids: Vec<_> = regions.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_regions_are_maximal_and_disjoint() {
        let sequence = "ACAACAACATTACAACAACAACAGACAACA";
        let motif = "ACA";
        let regions = find_regions(sequence, motif, 2);
        let seq = sequence.as_bytes();

        for pair in regions.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(!pair[0].overlaps(&pair[1]));
        }
        for r in &regions {
            assert_eq!(r.end - r.start + 1, r.length);
            assert_eq!(r.length, r.repeats * motif.len());
            let span = r.start - 1..r.end;
            assert_eq!(&sequence[span.clone()], r.context.repeat);

            let extends_right = span.end + 3 <= seq.len() && &seq[span.end..span.end + 3] == b"ACA";
            let extends_left = span.start >= 3 && &seq[span.start - 3..span.start] == b"ACA";
            assert!(!extends_right);
            assert!(!extends_left);
        }
    }
}
