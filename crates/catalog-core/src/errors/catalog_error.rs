use super::StorageError;

/// Top-level error type for schema refresh.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A fetch-event lookup could not complete. Callers own retry policy.
    #[error("repository read failed: {message}")]
    RepositoryReadFailure { message: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("schema discovery failed for source {source_id}: {reason}")]
    DiscoveryFailed { source_id: String, reason: String },

    #[error("config error: {0}")]
    ConfigError(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// True when the error came from reading fetch history.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::RepositoryReadFailure { .. })
    }
}
