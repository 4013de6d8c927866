//! Structured error types for the replichore toolkit.

use thiserror::Error;

/// Unified error type for all replichore operations.
#[derive(Debug, Error)]
pub enum ReplichoreError {
    /// Invalid input (bad arguments, bytes outside the expected alphabet)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the replichore crates.
pub type Result<T> = std::result::Result<T, ReplichoreError>;
