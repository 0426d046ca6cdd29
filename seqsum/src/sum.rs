//! Summation of 1..n

use std::thread;

use log::debug;

use crate::config::{Config, Strategy};
use crate::error::SeqsumError;

/// Deepest chain run on the caller's own stack
const INLINE_DEPTH: i64 = 1_000;

/// Stack reserved per recursion step on the dedicated thread
const FRAME_BYTES: usize = 256;

/// Headroom on the dedicated thread beyond the recursion itself
const STACK_MARGIN: usize = 1 << 20;

/// Sum `n + (n-1) + ... + 1` by recursing once per step.
///
/// Non-positive `n` is the base case and yields 0. Positive `n` above
/// `max_depth` is rejected before the first call. Chains longer than
/// `INLINE_DEPTH` run on a thread whose stack is sized from `n`; the caller
/// blocks until it returns.
pub fn seqsum_recursive(n: i64, max_depth: u64) -> Result<i64, SeqsumError> {
    if n > 0 && n as u64 > max_depth {
        return Err(SeqsumError::DepthExceeded { n, max_depth });
    }

    let sum = if n <= INLINE_DEPTH {
        recurse(n)
    } else {
        let stack_size = (n as usize).saturating_mul(FRAME_BYTES).saturating_add(STACK_MARGIN);
        debug!("recursing n={} on a {} byte stack", n, stack_size);

        thread::Builder::new()
            .name("seqsum-recurse".to_string())
            .stack_size(stack_size)
            .spawn(move || recurse(n))?
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    };

    sum.ok_or(SeqsumError::Overflow { n })
}

fn recurse(n: i64) -> Option<i64> {
    if n <= 0 {
        return Some(0);
    }

    n.checked_add(recurse(n - 1)?)
}

/// Same contract as [`seqsum_recursive`] with a loop instead of the call stack
pub fn seqsum_iterative(n: i64) -> Result<i64, SeqsumError> {
    let mut acc: i64 = 0;
    let mut arg = n;

    while arg > 0 {
        acc = acc.checked_add(arg).ok_or(SeqsumError::Overflow { n })?;
        arg -= 1;
    }

    Ok(acc)
}

/// Sum 1..n with the strategy and depth limit from `config`
pub fn seqsum(n: i64, config: &Config) -> Result<i64, SeqsumError> {
    debug!("seqsum: n={} strategy={} max_depth={}", n, config.strategy, config.max_depth);

    match config.strategy {
        Strategy::Recursive => seqsum_recursive(n, config.max_depth),
        Strategy::Iterative => seqsum_iterative(n),
    }
}
