//! seqsum error types

use thiserror::Error;

/// Errors that can occur while reading input or summing
#[derive(Debug, Error)]
pub enum SeqsumError {
    #[error("No number on input")]
    MissingInput,

    #[error("Not a number: '{token}'")]
    InvalidInput { token: String },

    #[error("Recursion depth for n={n} exceeds limit of {max_depth} (raise --max-depth or use --strategy iterative)")]
    DepthExceeded { n: i64, max_depth: u64 },

    #[error("Sum of 1..{n} overflows a 64-bit integer")]
    Overflow { n: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
