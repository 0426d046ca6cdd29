//! CLI argument parsing for seqsum

use clap::Parser;
use std::path::PathBuf;

use crate::config::Strategy;

#[derive(Parser, Debug)]
#[command(name = "seqsum")]
#[command(version, about = "Sum the integers 1..n by recursion (n read from stdin)", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// How to sum: recursive or iterative (default: recursive)
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Largest n accepted by the recursive sum (default: 1000000)
    #[arg(long)]
    pub max_depth: Option<u64>,
}
