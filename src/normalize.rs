//! Sequence normalization.
//!
//! Every sequence handed to the repeat locator goes through [`normalize`]:
//! letters are uppercased and anything outside the nucleotide alphabet
//! (`A`, `C`, `G`, `T`, `U`) is dropped, including whitespace, digits and gaps.

/// Returns true if the byte is one of the five accepted (uppercase) nucleotides.
#[inline]
pub fn is_nucleotide(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T' | b'U')
}

/// Uppercases `text` and keeps only `A`, `C`, `G`, `T` and `U`.
///
/// Never fails: the empty string normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    text.bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(|&b| is_nucleotide(b))
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_and_strips() {
        assert_eq!(normalize("acgtACGTxyz123"), "ACGTACGT");
    }

    #[test]
    fn test_keeps_uracil() {
        assert_eq!(normalize("acgu"), "ACGU");
    }

    #[test]
    fn test_strips_whitespace_and_gaps() {
        assert_eq!(normalize(" AC-GT\n\tN*a "), "ACGTA");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 xyz"), "");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(normalize("AÇGT"), "AGT");
    }

    #[test]
    fn test_is_nucleotide() {
        assert!(is_nucleotide(b'A'));
        assert!(is_nucleotide(b'U'));
        assert!(!is_nucleotide(b'a'));
        assert!(!is_nucleotide(b'N'));
    }
}
