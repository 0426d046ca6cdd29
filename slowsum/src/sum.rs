//! Throttled summation

use std::io::Write;

use log::{debug, trace};

use crate::error::SlowsumError;
use crate::throttle::Throttle;

/// Sum `1 + n + (n-1) + ... + 1`, pausing once after every step.
///
/// The accumulator starts at 1, not 0. Non-positive `n` returns 1 without
/// pausing.
pub fn slowsum<T: Throttle + ?Sized>(n: i64, throttle: &T) -> Result<i64, SlowsumError> {
    let mut acc: i64 = 1;
    let mut arg = n;

    while arg > 0 {
        acc = acc.checked_add(arg).ok_or(SlowsumError::Overflow { n })?;
        arg -= 1;
        trace!("slowsum({}): acc={} remaining={}", n, acc, arg);
        throttle.pause();
    }

    Ok(acc)
}

/// Sum each input in order, writing one result per line as it completes
pub fn run<T, W>(inputs: &[i64], throttle: &T, out: &mut W) -> Result<Vec<i64>, SlowsumError>
where
    T: Throttle + ?Sized,
    W: Write + ?Sized,
{
    let mut results = Vec::with_capacity(inputs.len());

    for &n in inputs {
        let sum = slowsum(n, throttle)?;
        debug!("slowsum({}) = {}", n, sum);

        writeln!(out, "{}", sum)?;
        out.flush()?;
        results.push(sum);
    }

    Ok(results)
}
