use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use catalog_core::config::RefreshConfig;
use catalog_core::constants::STALENESS_THRESHOLD_SECS;
use catalog_core::errors::{CatalogError, CatalogResult};
use catalog_core::models::{RefreshDecision, SourceId};
use catalog_core::traits::IFetchEventRepository;

use crate::staleness;

/// Decides whether a source's schema is due for re-discovery.
///
/// Stateless apart from the shared repository handle: each call performs exactly one
/// read and reads the wall clock once. Repository errors are returned unchanged.
#[derive(Clone)]
pub struct SchemaRefreshDecider {
    repository: Arc<dyn IFetchEventRepository>,
    threshold_secs: i64,
}

impl SchemaRefreshDecider {
    /// Create a decider with the default 24-hour threshold.
    pub fn new(repository: Arc<dyn IFetchEventRepository>) -> Self {
        Self {
            repository,
            threshold_secs: STALENESS_THRESHOLD_SECS,
        }
    }

    /// Create with a custom threshold. Sub-second parts are dropped; the remaining
    /// whole seconds must be positive.
    pub fn with_threshold(
        repository: Arc<dyn IFetchEventRepository>,
        threshold: Duration,
    ) -> CatalogResult<Self> {
        Ok(Self {
            repository,
            threshold_secs: checked_threshold(threshold.num_seconds())?,
        })
    }

    /// Create with the threshold from `config`.
    pub fn from_config(
        repository: Arc<dyn IFetchEventRepository>,
        config: &RefreshConfig,
    ) -> CatalogResult<Self> {
        let threshold_secs = i64::try_from(config.staleness_threshold_secs).unwrap_or(i64::MAX);
        Ok(Self {
            repository,
            threshold_secs: checked_threshold(threshold_secs)?,
        })
    }

    /// Threshold in seconds.
    pub fn threshold_secs(&self) -> i64 {
        self.threshold_secs
    }

    /// True when the source was never fetched or its latest fetch is at least
    /// the threshold old.
    pub fn should_refresh_schema(&self, source_id: &SourceId) -> CatalogResult<bool> {
        Ok(self.evaluate(source_id)?.should_refresh())
    }

    /// Like [`should_refresh_schema`](Self::should_refresh_schema), keeping the
    /// never-fetched / stale / fresh distinction.
    pub fn evaluate(&self, source_id: &SourceId) -> CatalogResult<RefreshDecision> {
        self.evaluate_at(source_id, Utc::now())
    }

    /// Evaluate as of `now`. Only whole seconds of `now` are used.
    #[instrument(skip(self), fields(threshold_secs = self.threshold_secs))]
    pub fn evaluate_at(
        &self,
        source_id: &SourceId,
        now: DateTime<Utc>,
    ) -> CatalogResult<RefreshDecision> {
        let latest = self
            .repository
            .get_most_recent_fetch_event_for_source(source_id)?;
        let decision = staleness::evaluate(latest.as_ref(), now.timestamp(), self.threshold_secs);
        debug!(?decision, "schema refresh decision");
        Ok(decision)
    }
}

fn checked_threshold(threshold_secs: i64) -> CatalogResult<i64> {
    if threshold_secs <= 0 {
        return Err(CatalogError::ConfigError(format!(
            "staleness threshold must be at least one second, got {threshold_secs}s"
        )));
    }
    Ok(threshold_secs)
}
