//! Hamming distance between byte sequences.

/// Count the positions at which `p` and `q` differ.
///
/// Equal lengths are a documented precondition, not a checked one: the
/// comparison zips the two slices, so unequal lengths silently compare only
/// the shorter common prefix.
pub fn distance(p: &[u8], q: &[u8]) -> usize {
    p.iter().zip(q.iter()).filter(|(a, b)| a != b).count()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(p in dna_seq(100)) {
            prop_assert_eq!(distance(&p, &p), 0);
        }

        #[test]
        fn distance_is_symmetric(p in dna_seq(100), q in dna_seq(100)) {
            prop_assert_eq!(distance(&p, &q), distance(&q, &p));
        }

        #[test]
        fn distance_bounded_by_shorter_length(p in dna_seq(100), q in dna_seq(100)) {
            prop_assert!(distance(&p, &q) <= p.len().min(q.len()));
        }
    }
}
