//! Tracing setup for the catalog CLI.
//!
//! Logs go to stderr so that the table on stdout stays clean.
//!
//! Usage:
//!   catalog --debug list              # Debug logging
//!   RUST_LOG=catalog_core=trace ...   # Fine-grained log control

use std::io::{self, IsTerminal};

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log at debug level unless RUST_LOG is set.
    pub debug: bool,
    /// Filter used when RUST_LOG is not set and debug is off.
    pub default_level: String,
}

pub fn init(config: &TracingConfig) -> Result<()> {
    let fallback = if config.debug { "debug" } else { config.default_level.as_str() };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .map_err(|err| anyhow!("invalid log level '{}': {}", fallback, err))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
