use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use seqsum::cli::Cli;
use seqsum::{Config, PROMPT, read_number};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }

    info!("seqsum starting: strategy={} max_depth={}", config.strategy, config.max_depth);

    println!("{}", PROMPT);
    let n = read_number(io::stdin().lock()).context("Failed to read number from stdin")?;

    let sum = seqsum::seqsum(n, &config)?;
    println!("{}", sum);

    Ok(())
}
