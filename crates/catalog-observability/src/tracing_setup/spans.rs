//! Span definitions per operation: refresh decision and schema discovery.

/// Create a refresh-decision span.
#[macro_export]
macro_rules! refresh_span {
    ($source_id:expr) => {
        tracing::info_span!("catalog.refresh", source_id = %$source_id)
    };
}

/// Create a schema discovery span.
#[macro_export]
macro_rules! discover_span {
    ($source_id:expr, $connection_id:expr) => {
        tracing::info_span!(
            "catalog.discover",
            source_id = %$source_id,
            connection_id = ?$connection_id
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REFRESH: &str = "catalog.refresh";
    pub const DISCOVER: &str = "catalog.discover";
}
