//! Tracing subscriber setup.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` when set, otherwise `logging.level`.
///
/// # Errors
///
/// Returns an error when `logging.level` is not a valid filter directive.
pub fn env_filter(cfg: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&cfg.level)
        .with_context(|| format!("invalid logging.level directive '{}'", cfg.level))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails on an invalid filter directive or when a global subscriber is
/// already installed.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = env_filter(cfg)?;
    let registry = tracing_subscriber::registry().with(filter);
    let result = if cfg.json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    result.context("failed to install tracing subscriber")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn level_directive_is_accepted() {
        let cfg = LoggingConfig {
            level: "complaints_server=debug,gas_proxy=info".to_owned(),
            json: false,
        };
        assert!(env_filter(&cfg).is_ok());
    }

    #[test]
    fn malformed_directive_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let cfg = LoggingConfig {
            level: "gas_proxy=loudest".to_owned(),
            json: false,
        };
        assert!(env_filter(&cfg).is_err());
    }
}
