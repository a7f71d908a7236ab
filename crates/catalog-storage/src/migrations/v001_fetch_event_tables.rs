//! v001: actor_catalog_fetch_event.

use rusqlite::Connection;

use catalog_core::errors::CatalogResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CatalogResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS actor_catalog_fetch_event (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            source_id         TEXT NOT NULL,
            actor_catalog_id  TEXT NOT NULL,
            config_hash       TEXT NOT NULL DEFAULT '',
            actor_version     TEXT NOT NULL DEFAULT '',
            created_at        INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_fetch_event_source_created
            ON actor_catalog_fetch_event(source_id, created_at DESC);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
