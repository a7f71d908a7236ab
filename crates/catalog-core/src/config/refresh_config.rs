use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Schema refresh configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Master switch for the refresh activity. The decider itself ignores it.
    pub auto_detect_schema: bool,
    /// A fetch at least this old (seconds) is stale.
    pub staleness_threshold_secs: u64,
    /// Ask discovery to bypass the connector's catalog cache.
    pub disable_discover_cache: bool,
}

impl RefreshConfig {
    pub fn staleness_threshold(&self) -> Duration {
        Duration::from_secs(self.staleness_threshold_secs)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto_detect_schema: defaults::DEFAULT_AUTO_DETECT_SCHEMA,
            staleness_threshold_secs: defaults::DEFAULT_STALENESS_THRESHOLD_SECS,
            disable_discover_cache: defaults::DEFAULT_DISABLE_DISCOVER_CACHE,
        }
    }
}
