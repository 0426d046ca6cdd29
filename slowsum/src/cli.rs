//! CLI argument parsing for slowsum

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slowsum")]
#[command(version, about = "Sum 1..n for fixed inputs, pausing after every step", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
