//! # catalog-core
//!
//! Foundation crate for connector schema refresh.
//! Defines the fetch-event model, the collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CatalogConfig;
pub use errors::{CatalogError, CatalogResult};
pub use models::{FetchEvent, RefreshDecision, SourceId};
