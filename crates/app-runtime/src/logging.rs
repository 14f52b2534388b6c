//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::container::config::{ConfigError, LoggingConfig};

/// Parse the configured filter directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(&config.filter).map_err(|err| ConfigError::LogFilter {
        filter: config.filter.clone(),
        message: err.to_string(),
    })
}

/// Install the global `fmt` subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = build_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(|err| ConfigError::LoggingInit(err.to_string()))
}
