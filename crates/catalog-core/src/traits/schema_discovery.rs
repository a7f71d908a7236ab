use crate::errors::CatalogResult;
use crate::models::{DiscoverSchemaRequest, DiscoveredCatalog};

/// Runs the connector's schema introspection.
pub trait ISchemaDiscovery: Send + Sync {
    fn discover_schema(&self, request: &DiscoverSchemaRequest) -> CatalogResult<DiscoveredCatalog>;
}
