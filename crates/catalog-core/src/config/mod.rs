pub mod defaults;
mod observability_config;
mod refresh_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_READ_POOL_SIZE;
use crate::errors::{CatalogError, CatalogResult};

pub use observability_config::ObservabilityConfig;
pub use refresh_config::RefreshConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub refresh: RefreshConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl CatalogConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml(s: &str) -> CatalogResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| CatalogError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.refresh.staleness_threshold_secs == 0 {
            return Err(CatalogError::ConfigError(
                "refresh.staleness_threshold_secs must be greater than 0".into(),
            ));
        }
        if !(1..=MAX_READ_POOL_SIZE).contains(&self.storage.read_pool_size) {
            return Err(CatalogError::ConfigError(format!(
                "storage.read_pool_size must be between 1 and {MAX_READ_POOL_SIZE}, got {}",
                self.storage.read_pool_size
            )));
        }
        Ok(())
    }
}
