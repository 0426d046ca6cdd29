//! slowsum - iterative sum of 1..n, throttled
//!
//! Each loop step adds the current counter to an accumulator and then blocks
//! the calling thread for a fixed delay (200ms by default). The accumulator
//! starts at 1, so the result for `n` is `1 + n(n+1)/2`.
//!
//! The binary runs the sum for 4 and then 32 and prints each result on its
//! own line.

pub mod cli;
pub mod config;
mod error;
mod sum;
mod throttle;

pub use config::Config;
pub use error::SlowsumError;
pub use sum::{run, slowsum};
pub use throttle::{DEFAULT_DELAY, FixedDelay, Throttle};

/// Inputs summed when no config overrides them
pub const DEFAULT_INPUTS: [i64; 2] = [4, 32];
