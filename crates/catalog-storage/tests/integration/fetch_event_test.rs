//! Integration test: recording and reading back fetch events.

use catalog_core::errors::{CatalogError, StorageError};
use catalog_core::models::{FetchEvent, SourceId};
use catalog_core::traits::IFetchEventRepository;
use catalog_storage::StorageEngine;
use uuid::Uuid;

fn make_event(source_id: SourceId, created_at: i64) -> FetchEvent {
    FetchEvent::new(source_id, Uuid::new_v4(), created_at)
        .with_config_hash("cfg-hash")
        .with_connector_version("1.2.3")
}

fn drop_fetch_table(engine: &StorageEngine) {
    engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            conn.execute_batch("DROP TABLE actor_catalog_fetch_event")
                .map_err(|e| CatalogError::StorageError(StorageError::SqliteError {
                    message: e.to_string(),
                }))
        })
        .unwrap();
}

#[test]
fn test_never_fetched_source_has_no_event() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let result = engine
        .get_most_recent_fetch_event_for_source(&SourceId::random())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_record_and_get_round_trips_every_field() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let source_id = SourceId::random();
    let event = make_event(source_id, 1_700_000_000);

    engine.record_fetch_event(&event).unwrap();
    let latest = engine
        .get_most_recent_fetch_event_for_source(&source_id)
        .unwrap()
        .expect("event should exist");

    assert_eq!(latest, event);
}

#[test]
fn test_most_recent_is_greatest_created_at_not_last_inserted() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let source_id = SourceId::random();

    let newest = make_event(source_id, 3_000);
    engine.record_fetch_event(&make_event(source_id, 2_000)).unwrap();
    engine.record_fetch_event(&newest).unwrap();
    engine.record_fetch_event(&make_event(source_id, 1_000)).unwrap();

    let latest = engine
        .get_most_recent_fetch_event_for_source(&source_id)
        .unwrap()
        .unwrap();
    assert_eq!(latest.catalog_id, newest.catalog_id);
    assert_eq!(latest.created_at, 3_000);
}

#[test]
fn test_equal_timestamps_resolve_to_last_inserted() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let source_id = SourceId::random();

    let first = make_event(source_id, 5_000);
    let second = make_event(source_id, 5_000);
    engine.record_fetch_event(&first).unwrap();
    engine.record_fetch_event(&second).unwrap();

    let latest = engine
        .get_most_recent_fetch_event_for_source(&source_id)
        .unwrap()
        .unwrap();
    assert_eq!(latest.catalog_id, second.catalog_id);
}

#[test]
fn test_events_are_scoped_per_source() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let a = SourceId::random();
    let b = SourceId::random();

    engine.record_fetch_event(&make_event(a, 100)).unwrap();
    engine.record_fetch_event(&make_event(b, 900)).unwrap();

    let latest_a = engine.get_most_recent_fetch_event_for_source(&a).unwrap().unwrap();
    assert_eq!(latest_a.source_id, a);
    assert_eq!(latest_a.created_at, 100);
    assert!(engine
        .get_most_recent_fetch_event_for_source(&SourceId::random())
        .unwrap()
        .is_none());
}

#[test]
fn test_list_returns_newest_first() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let source_id = SourceId::random();
    for ts in [20, 10, 30] {
        engine.record_fetch_event(&make_event(source_id, ts)).unwrap();
    }

    let listed: Vec<i64> = engine
        .list_fetch_events_for_source(&source_id)
        .unwrap()
        .iter()
        .map(|e| e.created_at)
        .collect();
    assert_eq!(listed, vec![30, 20, 10]);
    assert_eq!(engine.count_fetch_events().unwrap(), 3);
}

#[test]
fn test_read_failure_surfaces_as_repository_read_failure() {
    let engine = StorageEngine::open_in_memory().unwrap();
    drop_fetch_table(&engine);

    let err = engine
        .get_most_recent_fetch_event_for_source(&SourceId::random())
        .unwrap_err();
    assert!(err.is_read_failure(), "unexpected error: {err}");
    assert!(err.to_string().contains("actor_catalog_fetch_event"));
}

#[test]
fn test_write_failure_surfaces_as_storage_error() {
    let engine = StorageEngine::open_in_memory().unwrap();
    drop_fetch_table(&engine);

    let err = engine
        .record_fetch_event(&make_event(SourceId::random(), 1))
        .unwrap_err();
    assert!(matches!(err, CatalogError::StorageError(StorageError::SqliteError { .. })));
}

#[test]
fn test_file_backed_events_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let source_id = SourceId::random();

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine.record_fetch_event(&make_event(source_id, 42)).unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    let latest = engine
        .get_most_recent_fetch_event_for_source(&source_id)
        .unwrap()
        .expect("event should persist across reopen");
    assert_eq!(latest.created_at, 42);
}

#[test]
fn test_reopen_does_not_reapply_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    drop(StorageEngine::open(&path).unwrap());
    let engine = StorageEngine::open(&path).unwrap();

    let version = engine
        .pool()
        .writer
        .with_conn_sync(catalog_storage::migrations::current_version)
        .unwrap();
    assert_eq!(version, catalog_storage::migrations::LATEST_VERSION);
}

#[test]
fn test_file_backed_engine_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("catalog.db")).unwrap();
    let wal = engine
        .pool()
        .writer
        .with_conn_sync(catalog_storage::pool::pragmas::verify_wal_mode)
        .unwrap();
    assert!(wal);
}
