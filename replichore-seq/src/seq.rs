//! Validated DNA sequence type and complement operations.
//!
//! [`DnaSequence`] is a newtype over `Vec<u8>`. Construction uppercases and
//! validates every byte against [`DnaAlphabet`], so the inner data is always
//! uppercase and `Deref<Target=[u8]>` is safe to pass to the unvalidated
//! `&[u8]` algorithm functions in this crate.
//!
//! The byte-level [`complement`] and [`reverse_complement`] functions are
//! permissive: any byte outside `ACGT` complements to `N` rather than
//! failing, so they can be applied to raw window slices directly.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use replichore_core::{ReplichoreError, Sequence};

use crate::alphabet::DnaAlphabet;
use crate::kmer::KmerIter;

/// Complement a single DNA base under the Watson-Crick pairing rule.
///
/// `A↔T`, `C↔G`; every other byte (including `N` itself) maps to `N`.
pub fn complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        _ => b'N',
    }
}

/// Return the reverse complement of a raw byte sequence.
///
/// The input is reversed and each byte complemented via [`complement`].
/// Bytes outside `ACGT` become `N`, so the involution
/// `reverse_complement(reverse_complement(s)) == s` holds only for strict
/// `ACGT` input.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// A validated, always-uppercase DNA sequence (`ACGTN`).
#[derive(Clone)]
pub struct DnaSequence {
    data: Vec<u8>,
}

impl DnaSequence {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against
    /// [`DnaAlphabet`]. Returns an error if any byte is not `ACGTN` after
    /// uppercasing.
    pub fn new(bytes: impl AsRef<[u8]>) -> replichore_core::Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        for (i, &b) in data.iter().enumerate() {
            if !DnaAlphabet::is_valid(b) {
                return Err(ReplichoreError::InvalidInput(format!(
                    "invalid DNA byte '{}' (0x{:02X}) at position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(Self { data })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// # Safety (logical)
    ///
    /// Caller must guarantee all bytes are uppercase `ACGTN`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> DnaSequence {
        DnaSequence::from_validated(reverse_complement(&self.data))
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Only counts unambiguous G and C bases. Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self.iter().filter(|&&b| b == b'G' || b == b'C').count();
        gc as f64 / self.len() as f64
    }

    /// Iterate over k-mer windows of length `k`.
    pub fn kmers(&self, k: usize) -> KmerIter<'_> {
        KmerIter::new(&self.data, k)
    }

    /// 1-based positions at which cumulative GC skew is minimal.
    ///
    /// See [`min_skew_positions`](crate::skew::min_skew_positions) for the
    /// exact contract, including the virtual-start quirk.
    pub fn min_skew_positions(&self) -> Vec<usize> {
        crate::skew::min_skew_positions(&self.data)
    }
}

impl Deref for DnaSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for DnaSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for DnaSequence {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "DnaSequence(\"{}\")", s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

impl PartialEq for DnaSequence {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for DnaSequence {}

impl Hash for DnaSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DnaSequence {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DnaSequence {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
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
        fn revcomp_is_involutive_on_acgt(s in dna_seq(200)) {
            prop_assert_eq!(reverse_complement(&reverse_complement(&s)), s);
        }

        #[test]
        fn revcomp_preserves_length(s in dna_seq(200)) {
            prop_assert_eq!(reverse_complement(&s).len(), s.len());
        }
    }
}
