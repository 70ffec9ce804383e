//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the status line to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_status::initialization::init_logger_with;
use ip_status::{run_lookup, Config, StatusPanel};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let mut panel = StatusPanel::new(std::io::stdout());

    // Run the lookup using the library; the fallback line is the defined
    // output of a failed lookup, so only setup failures exit non-zero
    match run_lookup(config, &mut panel).await {
        Ok(report) => {
            log::debug!("Lookup finished in {:.2}s", report.elapsed_seconds);
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_status error: {:#}", e);
            process::exit(1);
        }
    }
}
