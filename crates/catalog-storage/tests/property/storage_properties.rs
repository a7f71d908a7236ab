use catalog_core::models::{FetchEvent, SourceId};
use catalog_core::traits::IFetchEventRepository;
use catalog_storage::StorageEngine;
use proptest::prelude::*;
use uuid::Uuid;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The repository always returns the maximum `created_at`, whatever the insert order.
    #[test]
    fn most_recent_is_max_created_at(
        timestamps in prop::collection::vec(0i64..4_000_000_000, 1..20),
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let source_id = SourceId::random();
        for ts in &timestamps {
            engine.record_fetch_event(&FetchEvent::new(source_id, Uuid::new_v4(), *ts)).unwrap();
        }

        let latest = engine
            .get_most_recent_fetch_event_for_source(&source_id)
            .unwrap()
            .unwrap();
        prop_assert_eq!(latest.created_at, *timestamps.iter().max().unwrap());
    }

    /// Events recorded for other sources never leak into a lookup.
    #[test]
    fn lookups_ignore_other_sources(
        own in 0i64..1_000,
        others in prop::collection::vec(1_000i64..2_000, 0..10),
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let source_id = SourceId::random();
        engine.record_fetch_event(&FetchEvent::new(source_id, Uuid::new_v4(), own)).unwrap();
        for ts in others {
            let other = FetchEvent::new(SourceId::random(), Uuid::new_v4(), ts);
            engine.record_fetch_event(&other).unwrap();
        }

        let latest = engine
            .get_most_recent_fetch_event_for_source(&source_id)
            .unwrap()
            .unwrap();
        prop_assert_eq!(latest.created_at, own);
    }
}
