use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use slowsum::cli::Cli;
use slowsum::{Config, FixedDelay};

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

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let throttle = FixedDelay::new(config.delay());

    info!("slowsum starting: inputs={:?} delay={:?}", config.inputs, throttle.delay());

    let start = Instant::now();
    slowsum::run(&config.inputs, &throttle, &mut io::stdout().lock())?;
    info!("slowsum finished in {:?}", start.elapsed());

    Ok(())
}
