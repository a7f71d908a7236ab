use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SourceId;

/// A completed schema-catalog fetch for a source.
///
/// `created_at` is epoch seconds. It is the only field the refresh decision reads;
/// the rest is provenance kept by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchEvent {
    pub source_id: SourceId,
    pub catalog_id: Uuid,
    pub config_hash: String,
    pub connector_version: String,
    pub created_at: i64,
}

impl FetchEvent {
    /// Build an event for `source_id` created at `created_at` (epoch seconds).
    pub fn new(source_id: SourceId, catalog_id: Uuid, created_at: i64) -> Self {
        Self {
            source_id,
            catalog_id,
            config_hash: String::new(),
            connector_version: String::new(),
            created_at,
        }
    }

    pub fn with_config_hash(mut self, config_hash: impl Into<String>) -> Self {
        self.config_hash = config_hash.into();
        self
    }

    pub fn with_connector_version(mut self, version: impl Into<String>) -> Self {
        self.connector_version = version.into();
        self
    }

    /// `created_at` as a UTC timestamp. `None` if it is outside chrono's range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }

    /// Whole seconds between `created_at` and `now_secs`. Negative when the event
    /// is dated after `now_secs`.
    pub fn elapsed_secs(&self, now_secs: i64) -> i64 {
        now_secs.saturating_sub(self.created_at)
    }
}
