mod fetch_event_repository;
mod schema_discovery;

pub use fetch_event_repository::IFetchEventRepository;
pub use schema_discovery::ISchemaDiscovery;
