//! seqsum - sum of 1..n by naive recursion
//!
//! Reads one signed integer from stdin and prints `n + (n-1) + ... + 1`.
//! Non-positive input sums to 0.
//!
//! The recursive routine keeps one stack frame per step, so its depth grows
//! with `n`. Deep chains get a dedicated stack sized to fit, and a
//! configurable depth limit rejects anything beyond it with
//! [`SeqsumError::DepthExceeded`].
//!
//! # Example
//!
//! ```
//! use seqsum::{DEFAULT_MAX_DEPTH, seqsum_recursive};
//!
//! assert_eq!(seqsum_recursive(5, DEFAULT_MAX_DEPTH).unwrap(), 15);
//! assert_eq!(seqsum_recursive(-3, DEFAULT_MAX_DEPTH).unwrap(), 0);
//! ```

pub mod cli;
pub mod config;
mod error;
mod input;
mod sum;

pub use config::{Config, Strategy};
pub use error::SeqsumError;
pub use input::read_number;
pub use sum::{seqsum, seqsum_iterative, seqsum_recursive};

/// Prompt printed before reading the number
pub const PROMPT: &str = "Enter a number:";

/// Default recursion depth limit (deepest accepted `n`)
pub const DEFAULT_MAX_DEPTH: u64 = 1_000_000;
