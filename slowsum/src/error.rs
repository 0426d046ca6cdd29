//! slowsum error types

use thiserror::Error;

/// Errors that can occur while summing or writing results
#[derive(Debug, Error)]
pub enum SlowsumError {
    #[error("Sum of 1..{n} overflows a 64-bit integer")]
    Overflow { n: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
