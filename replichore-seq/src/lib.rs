//! k-mer statistics and GC-skew analysis for DNA sequences.
//!
//! Implements the classic string-analysis toolkit used to hunt for
//! replication origins in bacterial genomes:
//!
//! - **k-mer counting** — [`frequency_table`], zero-allocation [`KmerIter`]
//! - **Frequent words** — [`frequent_words`] (exact ties) and
//!   [`frequent_words_with_mismatches`] (mismatch + reverse-complement
//!   tolerant)
//! - **Primitives** — [`hamming::distance`], [`reverse_complement`],
//!   [`neighbors`] (d-neighborhood under Hamming distance)
//! - **GC skew** — [`min_skew_positions`]
//! - **Typed sequences** — validated [`DnaSequence`]
//!
//! All algorithm functions are pure, operate on plain `&[u8]`, and are
//! permissive about malformed input: degenerate window lengths yield empty
//! results and unrecognized bytes complement to `N` rather than failing.
//!
//! # Example
//!
//! ```
//! use replichore_seq::{frequent_words, frequent_words_with_mismatches, min_skew_positions};
//!
//! let text = b"ACGTTGCATGTCGCATGATGCATGAGAGCT";
//!
//! let mut exact = frequent_words(text, 4);
//! exact.sort();
//! assert_eq!(exact, vec![b"CATG".to_vec(), b"GCAT".to_vec()]);
//!
//! let mut approx = frequent_words_with_mismatches(text, 4, 1);
//! approx.sort();
//! assert_eq!(approx, vec![b"ACAT".to_vec(), b"ATGT".to_vec()]);
//!
//! let genome = b"TAAAGACTGCCGAGAGGCCAACACGAGTGCTAGAACGAGGGGCGTAAACGCGGGTCCGAT";
//! assert_eq!(min_skew_positions(genome), vec![11, 24]);
//! ```

pub mod alphabet;
pub mod hamming;
pub mod kmer;
pub mod mismatch;
pub mod neighborhood;
pub mod seq;
pub mod skew;

pub use alphabet::{DnaAlphabet, DNA_BASES};
pub use kmer::{frequency_table, frequent_words, KmerIter};
pub use mismatch::frequent_words_with_mismatches;
pub use neighborhood::neighbors;
pub use seq::{complement, reverse_complement, DnaSequence};
pub use skew::min_skew_positions;
