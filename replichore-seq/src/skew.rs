//! Cumulative GC-skew minimization.
//!
//! The skew of a genome at position `i` is the running count of `G` minus
//! the running count of `C` over the first `i` bases. In bacterial genomes
//! the skew tends to reach its minimum near the replication origin, which
//! is what makes these positions interesting.

/// 1-based positions at which the cumulative GC skew attains its minimum.
///
/// Single forward pass keeping only the running skew and running minimum;
/// the full skew profile is never materialized. Skew goes up by one on `G`,
/// down by one on `C`, and is unchanged on any other byte.
///
/// The virtual pre-sequence position (index 0, skew 0) seeds both the
/// minimum and the result list. The seed entry is replaced the moment the
/// skew drops below zero, but if the minimum stays at the virtual start —
/// a genome whose skew never goes negative — the returned list begins with
/// `0`, which is not a real 1-based nucleotide position. This mirrors the
/// long-standing reference behavior and is kept deliberately.
pub fn min_skew_positions(genome: &[u8]) -> Vec<usize> {
    let mut positions = vec![0];
    let mut skew: i64 = 0;
    let mut min_skew: i64 = 0;

    for (i, &base) in genome.iter().enumerate() {
        match base {
            b'G' => skew += 1,
            b'C' => skew -= 1,
            _ => {}
        }

        if skew < min_skew {
            min_skew = skew;
            positions.clear();
            positions.push(i + 1);
        } else if skew == min_skew {
            positions.push(i + 1);
        }
    }
    positions
}
