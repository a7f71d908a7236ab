mod discovery;
mod fetch_event;
mod refresh_decision;
mod source_id;

pub use discovery::{DiscoverSchemaRequest, DiscoveredCatalog};
pub use fetch_event::FetchEvent;
pub use refresh_decision::RefreshDecision;
pub use source_id::SourceId;
