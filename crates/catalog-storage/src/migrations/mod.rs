//! Versioned schema migrations, applied in order on open.

mod v001_fetch_event_tables;

use rusqlite::Connection;
use tracing::info;

use catalog_core::errors::{CatalogResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> CatalogResult<()>;

/// Every migration, ordered by version.
const MIGRATIONS: &[(u32, MigrationFn)] = &[(1, v001_fetch_event_tables::migrate)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> CatalogResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        info!(version, "applied schema migration");
    }
    current_version(conn)
}

/// Highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> CatalogResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
