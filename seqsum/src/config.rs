//! Configuration for seqsum

use eyre::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the sum is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One call per step
    #[default]
    Recursive,
    /// Loop with a single accumulator
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            _ => Err(format!("Invalid strategy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Largest n the recursive strategy accepts
    #[serde(default = "default_max_depth")]
    pub max_depth: u64,

    /// Summation strategy
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_max_depth() -> u64 {
    crate::DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Load config from `path`, or use defaults when no path is given
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        debug!("loading config from {}", path.display());
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_depth, crate::DEFAULT_MAX_DEPTH);
        assert_eq!(config.strategy, Strategy::Recursive);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("strategy: iterative\n").unwrap();
        assert_eq!(config.strategy, Strategy::Iterative);
        assert_eq!(config.max_depth, crate::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_load_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seqsum.yml");
        std::fs::write(&path, "max_depth: 50\nstrategy: iterative\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.max_depth, 50);
        assert_eq!(loaded.strategy, Strategy::Iterative);
    }

    #[test]
    fn test_load_without_path_is_default() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.max_depth, crate::DEFAULT_MAX_DEPTH);
        assert_eq!(config.strategy, Strategy::Recursive);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("recursive".parse::<Strategy>().unwrap(), Strategy::Recursive);
        assert_eq!("ITERATIVE".parse::<Strategy>().unwrap(), Strategy::Iterative);
        assert!("tail".parse::<Strategy>().is_err());
    }
}
