//! Schema refresh activity: the decision plus the discover call it gates.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use catalog_core::config::RefreshConfig;
use catalog_core::errors::CatalogResult;
use catalog_core::models::{DiscoverSchemaRequest, DiscoveredCatalog, RefreshDecision, SourceId};
use catalog_core::traits::ISchemaDiscovery;
use catalog_observability::{discover_span, refresh_span};

use crate::decider::SchemaRefreshDecider;

/// What [`RefreshSchemaActivity::refresh_schema_if_stale`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Auto-detection is switched off; nothing was read or discovered.
    Disabled,
    /// The latest fetch is recent enough.
    Skipped { decision: RefreshDecision },
    /// Discovery ran.
    Refreshed {
        decision: RefreshDecision,
        catalog: DiscoveredCatalog,
    },
}

pub struct RefreshSchemaActivity {
    decider: SchemaRefreshDecider,
    discovery: Arc<dyn ISchemaDiscovery>,
    config: RefreshConfig,
}

impl RefreshSchemaActivity {
    pub fn new(
        decider: SchemaRefreshDecider,
        discovery: Arc<dyn ISchemaDiscovery>,
        config: RefreshConfig,
    ) -> Self {
        Self {
            decider,
            discovery,
            config,
        }
    }

    pub fn decider(&self) -> &SchemaRefreshDecider {
        &self.decider
    }

    pub fn should_refresh_schema(&self, source_id: &SourceId) -> CatalogResult<bool> {
        self.decider.should_refresh_schema(source_id)
    }

    /// Discover the source's schema unconditionally.
    pub fn refresh_schema(
        &self,
        source_id: &SourceId,
        connection_id: Uuid,
    ) -> CatalogResult<DiscoveredCatalog> {
        let _span = discover_span!(source_id, connection_id).entered();
        let request = DiscoverSchemaRequest {
            source_id: *source_id,
            connection_id,
            disable_cache: self.config.disable_discover_cache,
        };
        let catalog = self
            .discovery
            .discover_schema(&request)
            .inspect_err(|e| warn!(error = %e, "schema discovery failed"))?;
        info!(
            catalog_id = %catalog.catalog_id,
            catalog_changed = catalog.catalog_changed,
            "schema discovered"
        );
        Ok(catalog)
    }

    /// Discover only when auto-detection is on and the latest fetch is stale.
    pub fn refresh_schema_if_stale(
        &self,
        source_id: &SourceId,
        connection_id: Uuid,
    ) -> CatalogResult<RefreshOutcome> {
        let _span = refresh_span!(source_id).entered();
        if !self.config.auto_detect_schema {
            return Ok(RefreshOutcome::Disabled);
        }

        let decision = self.decider.evaluate(source_id)?;
        if !decision.should_refresh() {
            info!(?decision, "schema fetched recently, skipping refresh");
            return Ok(RefreshOutcome::Skipped { decision });
        }

        let catalog = self.refresh_schema(source_id, connection_id)?;
        Ok(RefreshOutcome::Refreshed { decision, catalog })
    }
}
