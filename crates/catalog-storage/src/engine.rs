//! StorageEngine — owns the ConnectionPool, runs migrations on open, and
//! implements IFetchEventRepository.

use std::path::Path;

use tracing::{debug, warn};

use catalog_core::config::StorageConfig;
use catalog_core::errors::CatalogResult;
use catalog_core::models::{FetchEvent, SourceId};
use catalog_core::traits::IFetchEventRepository;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::fetch_event_ops;

/// The main storage engine for fetch events.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with default settings.
    pub fn open(path: &Path) -> CatalogResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the pool size and busy timeout from `config`.
    /// `config.db_path` is ignored in favour of `path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> CatalogResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open the database at `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> CatalogResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> CatalogResult<Self> {
        let pool = ConnectionPool::open_in_memory(StorageConfig::default().busy_timeout_ms)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> CatalogResult<()> {
        let version = self.pool.writer.with_conn_sync(migrations::run_migrations)?;
        debug!(version, path = ?self.pool.db_path, "fetch event storage ready");
        Ok(())
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Record a completed catalog fetch.
    pub fn record_fetch_event(&self, event: &FetchEvent) -> CatalogResult<i64> {
        let id = self
            .pool
            .writer
            .with_conn_sync(|conn| fetch_event_ops::insert_fetch_event(conn, event))?;
        debug!(
            source_id = %event.source_id,
            catalog_id = %event.catalog_id,
            created_at = event.created_at,
            "recorded catalog fetch event"
        );
        Ok(id)
    }

    /// Every fetch event for a source, newest first.
    pub fn list_fetch_events_for_source(
        &self,
        source_id: &SourceId,
    ) -> CatalogResult<Vec<FetchEvent>> {
        self.with_reader(|conn| fetch_event_ops::list_for_source(conn, source_id))
    }

    /// Total number of recorded fetch events.
    pub fn count_fetch_events(&self) -> CatalogResult<usize> {
        self.with_reader(fetch_event_ops::count_fetch_events)
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> CatalogResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IFetchEventRepository for StorageEngine {
    fn get_most_recent_fetch_event_for_source(
        &self,
        source_id: &SourceId,
    ) -> CatalogResult<Option<FetchEvent>> {
        self.with_reader(|conn| fetch_event_ops::get_most_recent_for_source(conn, source_id))
            .inspect_err(|e| warn!(%source_id, error = %e, "fetch event lookup failed"))
    }
}
