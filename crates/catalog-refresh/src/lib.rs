//! # catalog-refresh
//!
//! Decides whether a source's schema should be re-discovered, based on the age of
//! its most recent catalog fetch, and runs the discover call when it should.

pub mod activity;
pub mod decider;
pub mod staleness;

pub use activity::{RefreshOutcome, RefreshSchemaActivity};
pub use decider::SchemaRefreshDecider;
