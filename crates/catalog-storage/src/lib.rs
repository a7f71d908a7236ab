//! # catalog-storage
//!
//! SQLite-backed record of schema-catalog fetches. Implements
//! [`IFetchEventRepository`](catalog_core::traits::IFetchEventRepository).

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use catalog_core::errors::{CatalogError, StorageError};

/// Map a write-side or lifecycle failure into a `CatalogError`.
pub(crate) fn to_storage_err(message: String) -> CatalogError {
    CatalogError::StorageError(StorageError::SqliteError { message })
}

/// Map a failed fetch-history read into a `CatalogError`.
pub(crate) fn to_read_err(message: String) -> CatalogError {
    CatalogError::RepositoryReadFailure { message }
}
