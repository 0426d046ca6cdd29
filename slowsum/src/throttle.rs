//! Per-step delay

use std::thread;
use std::time::Duration;

/// Delay between loop steps when nothing overrides it
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Called once after every summation step
pub trait Throttle {
    fn pause(&self);
}

/// Blocks the calling thread for a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(Duration);

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn delay(&self) -> Duration {
        self.0
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_DELAY)
    }
}

impl Throttle for FixedDelay {
    fn pause(&self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}
