//! # catalog-observability
//!
//! Subscriber installation and span helpers shared by the refresh crates.

pub mod tracing_setup;

pub use tracing_setup::subscriber::{build_filter, init_tracing};
