//! Raw SQL operations for the actor_catalog_fetch_event table.

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use catalog_core::errors::CatalogResult;
use catalog_core::models::{FetchEvent, SourceId};

use crate::{to_read_err, to_storage_err};

/// Insert a fetch event. Returns the new row id.
pub fn insert_fetch_event(conn: &Connection, event: &FetchEvent) -> CatalogResult<i64> {
    conn.execute(
        "INSERT INTO actor_catalog_fetch_event
            (source_id, actor_catalog_id, config_hash, actor_version, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event.source_id.to_string(),
            event.catalog_id.to_string(),
            event.config_hash,
            event.connector_version,
            event.created_at,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Raw fetch event row from the database.
struct RawFetchEvent {
    source_id: String,
    catalog_id: String,
    config_hash: String,
    connector_version: String,
    created_at: i64,
}

impl RawFetchEvent {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            source_id: row.get(0)?,
            catalog_id: row.get(1)?,
            config_hash: row.get(2)?,
            connector_version: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn into_event(self) -> CatalogResult<FetchEvent> {
        let source_id: SourceId = self
            .source_id
            .parse()
            .map_err(|e| to_read_err(format!("bad source_id {:?}: {e}", self.source_id)))?;
        let catalog_id = Uuid::parse_str(&self.catalog_id)
            .map_err(|e| to_read_err(format!("bad actor_catalog_id {:?}: {e}", self.catalog_id)))?;
        Ok(FetchEvent {
            source_id,
            catalog_id,
            config_hash: self.config_hash,
            connector_version: self.connector_version,
            created_at: self.created_at,
        })
    }
}

/// Get the most recent fetch event for a source. Equal timestamps resolve to the
/// last inserted row.
pub fn get_most_recent_for_source(
    conn: &Connection,
    source_id: &SourceId,
) -> CatalogResult<Option<FetchEvent>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT source_id, actor_catalog_id, config_hash, actor_version, created_at
             FROM actor_catalog_fetch_event
             WHERE source_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT 1",
        )
        .map_err(|e| to_read_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![source_id.to_string()], RawFetchEvent::from_row)
        .map_err(|e| to_read_err(e.to_string()))?;

    match rows.next() {
        Some(row) => {
            let raw = row.map_err(|e| to_read_err(e.to_string()))?;
            Ok(Some(raw.into_event()?))
        }
        None => Ok(None),
    }
}

/// All fetch events for a source, newest first.
pub fn list_for_source(conn: &Connection, source_id: &SourceId) -> CatalogResult<Vec<FetchEvent>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT source_id, actor_catalog_id, config_hash, actor_version, created_at
             FROM actor_catalog_fetch_event
             WHERE source_id = ?1
             ORDER BY created_at DESC, id DESC",
        )
        .map_err(|e| to_read_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![source_id.to_string()], RawFetchEvent::from_row)
        .map_err(|e| to_read_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_read_err(e.to_string()))?;
        events.push(raw.into_event()?);
    }
    Ok(events)
}

/// Count fetch events across all sources.
pub fn count_fetch_events(conn: &Connection) -> CatalogResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM actor_catalog_fetch_event", [], |row| row.get(0))
        .map_err(|e| to_read_err(e.to_string()))?;
    Ok(count as usize)
}
