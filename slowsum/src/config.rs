//! Configuration for slowsum

use eyre::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Numbers to sum, in print order
    #[serde(default = "default_inputs")]
    pub inputs: Vec<i64>,

    /// Pause after each step in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_inputs() -> Vec<i64> {
    crate::DEFAULT_INPUTS.to_vec()
}

fn default_delay_ms() -> u64 {
    crate::DEFAULT_DELAY.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Config {
    /// Load config from `path`, or use defaults when no path is given
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!("loading config from {}", path.display());
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
            }
            None => Ok(Config::default()),
        }
    }

    /// Get the per-step delay as a Duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
