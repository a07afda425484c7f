//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `isitdown` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use isitdown::config::{Opt, EXIT_SETUP_FAILED};
use isitdown::initialization::init_logger_with;
use isitdown::{
    exit_code, render_json, render_plain, AvailabilityFetcher, Config, IsItDownRightNow,
    OutputFormat,
};

/// Initializes logging and builds the fetcher for the configured endpoint.
fn setup(config: &Config) -> Result<AvailabilityFetcher> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    AvailabilityFetcher::from_config(config).context("Failed to set up the availability check")
}

#[tokio::main]
async fn main() {
    let opt = Opt::parse();
    let query = opt.query.clone();
    let config = Config::from(opt);

    let fetcher = match setup(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("isitdown error: {:#}", e);
            process::exit(EXIT_SETUP_FAILED);
        }
    };

    let check = IsItDownRightNow::check_with(query, &fetcher).await;
    match config.output {
        OutputFormat::Plain => println!("{}", render_plain(&check)),
        OutputFormat::Json => println!("{}", render_json(&check)),
    }

    process::exit(exit_code(&check));
}
