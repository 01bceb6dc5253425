//! Logging setup
//!
//! Installs a `tracing` fmt subscriber filtered by the configured level.
//! `RUST_LOG`, when set, takes precedence over the configuration.

use crate::config::LoggingConfig;
use crate::utils::error::{JustInvestError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter the subscriber will use.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| JustInvestError::Config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global subscriber. Call once, from the binary.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| JustInvestError::Config(format!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_directives() {
        let config = LoggingConfig {
            level: "justinvest=debug,warn".to_string(),
            ..LoggingConfig::default()
        };

        // RUST_LOG may be set in CI; either way a filter must come back.
        assert!(env_filter(&config).is_ok());
    }
}
