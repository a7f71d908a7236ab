use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SourceId;

/// A request to introspect a source's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverSchemaRequest {
    pub source_id: SourceId,
    pub connection_id: Uuid,
    /// Skip any cached catalog the connector layer holds.
    pub disable_cache: bool,
}

/// The catalog returned by a discover call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredCatalog {
    pub source_id: SourceId,
    pub catalog_id: Uuid,
    /// Epoch seconds.
    pub fetched_at: i64,
    /// Whether the catalog differs from the previously stored one.
    pub catalog_changed: bool,
}
