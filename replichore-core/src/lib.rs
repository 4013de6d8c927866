//! Shared primitives for the replichore toolkit.
//!
//! `replichore-core` provides the foundation the algorithm crates build on:
//!
//! - **Error types** — [`ReplichoreError`] and [`Result`] for structured error handling
//! - **Traits** — the [`Sequence`] abstraction over raw sequence bytes

pub mod error;
pub mod traits;

pub use error::{ReplichoreError, Result};
pub use traits::Sequence;
