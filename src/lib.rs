//! ip_status library: public-IP lookup functionality
//!
//! This library performs a single public-IP lookup against a JSON IP-lookup
//! service and renders the result as one status line on a display surface.
//! On success the line embeds the returned address; on any failure it is a
//! fixed fallback message and the underlying error is logged.
//!
//! # Example
//!
//! ```no_run
//! use ip_status::{run_lookup, Config, StatusPanel};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut panel = StatusPanel::new(std::io::stdout());
//!
//! let report = run_lookup(config, &mut panel).await?;
//! if let Some(addr) = report.addr {
//!     eprintln!("resolved public address: {}", addr);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod lookup;
mod render;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError};
pub use lookup::fetch_public_ip;
pub use render::{fallback_text, success_text, StatusPanel};
pub use run::{run_lookup, LookupOutcome, LookupReport};

// Internal run module (contains the single lookup operation)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::config::Config;
    use crate::initialization::init_client;
    use crate::lookup::fetch_public_ip;
    use crate::render::{fallback_text, success_text, StatusPanel};

    /// How the lookup ended.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LookupOutcome {
        /// The endpoint returned an address.
        Resolved,
        /// The lookup failed and the fallback line was rendered.
        FellBack,
    }

    /// Result of a completed lookup invocation.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// The status line that was written to the panel
        pub text: String,
        /// The resolved address, if the lookup succeeded
        pub addr: Option<String>,
        /// How the lookup ended
        pub outcome: LookupOutcome,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one public-IP lookup and writes the status line to the panel.
    ///
    /// This is the main entry point for the library. It issues a single GET
    /// to the configured endpoint, extracts the address from the JSON body,
    /// and writes exactly one line to `panel`: the success template on
    /// success, the fixed fallback text on any failure. A failed lookup is
    /// not an error from this function's point of view; the fallback line is
    /// its defined output, and the cause is logged at error level.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be built or the panel
    /// itself cannot be written.
    pub async fn run_lookup<W: Write>(
        config: Config,
        panel: &mut StatusPanel<W>,
    ) -> Result<LookupReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let start_time = std::time::Instant::now();
        info!("Looking up public IP via {}", config.endpoint);

        let (text, addr, outcome) = match fetch_public_ip(&client, &config.endpoint).await {
            Ok(addr) => {
                info!("Lookup succeeded: {}", addr);
                (success_text(&addr), Some(addr), LookupOutcome::Resolved)
            }
            Err(e) => {
                error!("Error fetching IP: {}", e);
                (
                    fallback_text().to_string(),
                    None,
                    LookupOutcome::FellBack,
                )
            }
        };

        panel
            .set_text(&text)
            .context("Failed to write status line")?;

        Ok(LookupReport {
            text,
            addr,
            outcome,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
