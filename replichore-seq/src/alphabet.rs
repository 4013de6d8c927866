//! Alphabet definition for DNA sequence validation.
//!
//! The algorithm modules in this crate deliberately accept unvalidated
//! `&[u8]` input; the alphabet only backs the typed
//! [`DnaSequence`](crate::DnaSequence) entry point.

/// The four unambiguous DNA bases, in lexicographic order.
pub const DNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Validated DNA alphabet: `ACGT` plus the `N` placeholder.
///
/// `N` is admitted because complement computation maps every unrecognized
/// byte to `N`, so round-tripping a complemented sequence through the
/// validated type must succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl DnaAlphabet {
    /// The set of valid uppercase bytes.
    pub const VALID_BYTES: &'static [u8] = b"ACGTN";

    /// Check whether a byte (assumed already uppercased) is valid.
    pub fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}
