//! Logging infrastructure
//!
//! Initializes the global tracing subscriber from the loaded configuration.
//! Output goes to stderr so table/JSON results on stdout stay clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::models::LoggingConfig;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. The format switch
/// follows the config: `json` for machine-readable logs, `pretty` otherwise.
///
/// # Errors
/// Returns an error if a subscriber is already installed or the configured
/// format is unknown.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?,
        "pretty" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?,
        other => return Err(anyhow!("unknown log format: {other}")),
    }

    Ok(())
}
