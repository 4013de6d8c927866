//! k-mer iteration and frequency counting.
//!
//! [`KmerIter`] wraps [`std::slice::Windows`] for zero-allocation window
//! iteration. [`frequency_table`] builds the occurrence map over all
//! overlapping windows in one forward pass, and [`frequent_words`] extracts
//! every window tied for the maximum count.
//!
//! All functions here are permissive about degenerate shapes: `k == 0` or
//! `k` longer than the text yields no windows rather than an error.

use std::collections::HashMap;

/// Iterator over k-mer windows of a byte slice.
///
/// Yields `&[u8]` slices of length `k`, sliding by one base. Implements
/// [`ExactSizeIterator`] and [`DoubleEndedIterator`].
pub struct KmerIter<'a> {
    inner: std::slice::Windows<'a, u8>,
    remaining: usize,
}

impl<'a> KmerIter<'a> {
    /// Create a new k-mer iterator.
    ///
    /// If `k == 0` or `k > seq.len()` the iterator yields nothing.
    pub fn new(seq: &'a [u8], k: usize) -> Self {
        if k == 0 || k > seq.len() {
            // Windows over an empty slice with a nonzero size yields nothing.
            let empty: &'a [u8] = &[];
            return Self {
                inner: empty.windows(1),
                remaining: 0,
            };
        }
        Self {
            inner: seq.windows(k),
            remaining: seq.len() - k + 1,
        }
    }
}

impl<'a> Iterator for KmerIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for KmerIter<'a> {}

impl<'a> DoubleEndedIterator for KmerIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

/// Count every overlapping window of length `k` in `text`.
///
/// Single forward pass; each window increments its own tally, so the counts
/// sum to `text.len() - k + 1` whenever `1 <= k <= text.len()`. Degenerate
/// `k` yields an empty map. Absent keys implicitly have count 0; every
/// present count is strictly positive.
pub fn frequency_table(text: &[u8], k: usize) -> HashMap<Vec<u8>, usize> {
    let mut freq: HashMap<Vec<u8>, usize> = HashMap::new();
    for window in KmerIter::new(text, k) {
        *freq.entry(window.to_vec()).or_insert(0) += 1;
    }
    freq
}

/// Maximum count in a frequency map, or 0 if the map is empty.
pub(crate) fn max_count(freq: &HashMap<Vec<u8>, usize>) -> usize {
    freq.values().copied().max().unwrap_or(0)
}

/// Return every window of length `k` tied for the maximum occurrence count.
///
/// Deterministic up to ordering: the result always contains every tied
/// maximum, in map iteration order. Degenerate `k` yields an empty vector.
pub fn frequent_words(text: &[u8], k: usize) -> Vec<Vec<u8>> {
    let freq = frequency_table(text, k);
    let max = max_count(&freq);
    freq.into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(pattern, _)| pattern)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
        words.sort();
        words
    }

    // --- KmerIter ---

    #[test]
    fn yields_all_windows() {
        let kmers: Vec<&[u8]> = KmerIter::new(b"ACGTA", 3).collect();
        assert_eq!(kmers, vec![&b"ACG"[..], b"CGT", b"GTA"]);
    }

    #[test]
    fn k_equal_to_len_yields_one() {
        let kmers: Vec<&[u8]> = KmerIter::new(b"ACGT", 4).collect();
        assert_eq!(kmers, vec![&b"ACGT"[..]]);
    }

    #[test]
    fn k_zero_yields_nothing() {
        assert_eq!(KmerIter::new(b"ACGT", 0).count(), 0);
    }

    #[test]
    fn k_longer_than_text_yields_nothing() {
        assert_eq!(KmerIter::new(b"ACG", 4).count(), 0);
    }

    #[test]
    fn exact_size() {
        let iter = KmerIter::new(b"ACGTACGT", 3);
        assert_eq!(iter.len(), 6);
    }

    #[test]
    fn double_ended() {
        let mut iter = KmerIter::new(b"ACGTA", 3);
        assert_eq!(iter.next_back(), Some(&b"GTA"[..]));
        assert_eq!(iter.next(), Some(&b"ACG"[..]));
        assert_eq!(iter.len(), 1);
    }

    // --- frequency_table ---

    #[test]
    fn counts_overlapping_occurrences() {
        let freq = frequency_table(b"AAAA", 2);
        assert_eq!(freq.len(), 1);
        assert_eq!(freq[&b"AA".to_vec()], 3);
    }

    #[test]
    fn counts_sum_to_window_count() {
        let text = b"ACGTTGCATGTCGCATGATGCATGAGAGCT";
        let k = 4;
        let freq = frequency_table(text, k);
        let total: usize = freq.values().sum();
        assert_eq!(total, text.len() - k + 1);
    }

    #[test]
    fn empty_for_degenerate_k() {
        assert!(frequency_table(b"ACGT", 0).is_empty());
        assert!(frequency_table(b"ACGT", 5).is_empty());
        assert!(frequency_table(b"", 1).is_empty());
    }

    #[test]
    fn absent_key_is_zero() {
        let freq = frequency_table(b"AAAA", 2);
        assert_eq!(freq.get(&b"CC".to_vec()).copied().unwrap_or(0), 0);
    }

    // --- frequent_words ---

    #[test]
    fn course_sample() {
        // Bioinformatics course sample: ties at count 3.
        let words = frequent_words(b"ACGTTGCATGTCGCATGATGCATGAGAGCT", 4);
        assert_eq!(sorted(words), vec![b"CATG".to_vec(), b"GCAT".to_vec()]);
    }

    #[test]
    fn single_winner() {
        let words = frequent_words(b"AAAAT", 2);
        assert_eq!(words, vec![b"AA".to_vec()]);
    }

    #[test]
    fn all_tied_when_unique() {
        // Every 3-mer occurs exactly once, so all are returned.
        let words = frequent_words(b"ACGT", 3);
        assert_eq!(sorted(words), vec![b"ACG".to_vec(), b"CGT".to_vec()]);
    }

    #[test]
    fn empty_text_gives_empty_result() {
        assert!(frequent_words(b"", 3).is_empty());
    }
}
