//! Global subscriber installation.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use catalog_core::config::ObservabilityConfig;
use catalog_core::errors::{CatalogError, CatalogResult};

/// Filter from `RUST_LOG` when set, otherwise from `config.log_level`.
pub fn build_filter(config: &ObservabilityConfig) -> CatalogResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| CatalogError::ConfigError(format!("invalid log_level: {e}"))),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> CatalogResult<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json_logs {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    result.map_err(|e| CatalogError::ConfigError(format!("tracing init failed: {e}")))
}
