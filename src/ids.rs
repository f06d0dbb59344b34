//! Opaque identifiers for regions and sequences.
//!
//! Identifiers look like `vntr-k3x9q0a1z`: a prefix and nine random base-36
//! characters. A generator remembers what it issued and draws again on a
//! collision, so identifiers are unique within one analysis.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Prefix used for repeat region identifiers.
pub const REGION_PREFIX: &str = "vntr";
/// Prefix used for sequence result identifiers.
pub const SEQUENCE_PREFIX: &str = "seq";

/// Issues unique random identifiers.
#[derive(Debug)]
pub struct IdGenerator {
    rng: StdRng,
    issued: HashSet<String>,
}

impl IdGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed (reproducible identifiers).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Returns a fresh identifier `<prefix>-<9 base-36 chars>`.
    pub fn next_id(&mut self, prefix: &str) -> String {
        loop {
            let suffix: String = (0..SUFFIX_LEN)
                .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
                .collect();
            let id = format!("{}-{}", prefix, suffix);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let mut ids = IdGenerator::seeded(7);
        let id = ids.next_id(REGION_PREFIX);
        let suffix = id.strip_prefix("vntr-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = IdGenerator::seeded(42);
        let all: HashSet<String> = (0..5000).map(|_| ids.next_id(SEQUENCE_PREFIX)).collect();
        assert_eq!(all.len(), 5000);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = IdGenerator::seeded(1);
        let mut b = IdGenerator::seeded(1);
        assert_eq!(a.next_id("x"), b.next_id("x"));
    }
}
