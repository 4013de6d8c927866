//! Frequent words tolerant of mismatches and reverse complements.
//!
//! The naive formulation scores all `4^k` candidate patterns against the
//! whole text, which is infeasible beyond tiny `k`. This module inverts the
//! loop: only the windows actually present in the text (and their reverse
//! complements) are tallied, and each tally is then spread over the
//! candidate patterns in its d-neighborhood. The work is proportional to
//! (observed windows × neighborhood size) instead of `4^k × text length`.

use std::collections::HashMap;

use crate::kmer::{max_count, KmerIter};
use crate::neighborhood::neighbors;
use crate::seq::reverse_complement;

/// Sparse tally of every literal window of length `k` in `text`, together
/// with the window's reverse complement under its own key.
fn observed_counts(text: &[u8], k: usize) -> HashMap<Vec<u8>, usize> {
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
    for window in KmerIter::new(text, k) {
        let rc = reverse_complement(window);
        *counts.entry(window.to_vec()).or_insert(0) += 1;
        *counts.entry(rc).or_insert(0) += 1;
    }
    counts
}

/// Return every length-`k` pattern over `ACGT` that maximizes the number of
/// occurrences in `text` counted with up to `d` mismatches, where a pattern
/// and its reverse complement score into the same candidate.
///
/// Candidates need not be substrings of `text`. Three phases:
///
/// 1. Tally each literal window and its reverse complement.
/// 2. For each tallied pattern, add its count to the candidate score of
///    every member of its d-neighborhood. A candidate's final score is the
///    summed count of every observed sequence within distance `d` of it.
/// 3. Collect all candidates tied for the maximum score (0 if none).
///
/// Degenerate `k` (`0`, or longer than `text`) yields an empty result.
pub fn frequent_words_with_mismatches(text: &[u8], k: usize, d: usize) -> Vec<Vec<u8>> {
    let mut scores: HashMap<Vec<u8>, usize> = HashMap::new();
    for (pattern, count) in observed_counts(text, k) {
        for neighbor in neighbors(&pattern, d) {
            *scores.entry(neighbor).or_insert(0) += count;
        }
    }

    let max = max_count(&scores);
    scores
        .into_iter()
        .filter(|&(_, score)| score == max)
        .map(|(pattern, _)| pattern)
        .collect()
}
