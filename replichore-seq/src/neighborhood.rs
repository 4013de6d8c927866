//! d-neighborhood generation under Hamming distance.
//!
//! The neighborhood of a pattern is the set of all same-length sequences
//! over `ACGT` within a given Hamming distance of it. Generation is
//! suffix-first recursive: the set grows by a branching factor of four per
//! unit of remaining mismatch budget, so it is exponential in `d` and only
//! intended for the small `k <= ~12`, `d <= ~3` regime the frequent-words
//! callers use.

use std::collections::HashSet;

use crate::alphabet::DNA_BASES;
use crate::hamming;

/// The set of all sequences of `pattern.len()` over `ACGT` with Hamming
/// distance at most `d` from `pattern`.
///
/// `neighbors(p, 0)` is `{p}` exactly; for a single-base pattern and
/// `d >= 1` the result is all four bases. An empty pattern has only itself
/// within any distance, so its neighborhood is `{p}` as well. The set
/// container guarantees no duplicates.
pub fn neighbors(pattern: &[u8], d: usize) -> HashSet<Vec<u8>> {
    if d == 0 || pattern.is_empty() {
        return HashSet::from([pattern.to_vec()]);
    }
    if pattern.len() == 1 {
        return DNA_BASES.iter().map(|&b| vec![b]).collect();
    }

    let suffix = &pattern[1..];
    let mut neighborhood = HashSet::new();
    for suffix_neighbor in neighbors(suffix, d) {
        if hamming::distance(suffix, &suffix_neighbor) < d {
            // Mismatch budget remains for the first position: any base works.
            for &base in &DNA_BASES {
                let mut neighbor = Vec::with_capacity(pattern.len());
                neighbor.push(base);
                neighbor.extend_from_slice(&suffix_neighbor);
                neighborhood.insert(neighbor);
            }
        } else {
            // Budget exhausted by the suffix: the first base must match.
            let mut neighbor = Vec::with_capacity(pattern.len());
            neighbor.push(pattern[0]);
            neighbor.extend_from_slice(&suffix_neighbor);
            neighborhood.insert(neighbor);
        }
    }
    neighborhood
}
