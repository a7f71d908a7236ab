use std::sync::Arc;

use catalog_core::constants::STALENESS_THRESHOLD_SECS;
use catalog_core::errors::CatalogResult;
use catalog_core::models::{FetchEvent, SourceId};
use catalog_core::traits::IFetchEventRepository;
use catalog_refresh::SchemaRefreshDecider;
use chrono::{DateTime, Utc};
use proptest::prelude::*;
use uuid::Uuid;

struct FixedRepository(Option<FetchEvent>);

impl IFetchEventRepository for FixedRepository {
    fn get_most_recent_fetch_event_for_source(
        &self,
        _: &SourceId,
    ) -> CatalogResult<Option<FetchEvent>> {
        Ok(self.0.clone())
    }
}

fn decide(event: Option<FetchEvent>, now_secs: i64) -> bool {
    let now = DateTime::<Utc>::from_timestamp(now_secs, 0).unwrap();
    SchemaRefreshDecider::new(Arc::new(FixedRepository(event)))
        .evaluate_at(&SourceId::random(), now)
        .unwrap()
        .should_refresh()
}

fn arb_now() -> impl Strategy<Value = i64> {
    1_000_000_000i64..4_000_000_000
}

proptest! {
    #[test]
    fn older_than_threshold_always_refreshes(now in arb_now(), extra in 1i64..10_000_000) {
        let created_at = now - STALENESS_THRESHOLD_SECS - extra;
        let event = FetchEvent::new(SourceId::random(), Uuid::new_v4(), created_at);
        prop_assert!(decide(Some(event), now));
    }

    #[test]
    fn younger_than_threshold_never_refreshes(
        now in arb_now(),
        age in 0i64..STALENESS_THRESHOLD_SECS,
    ) {
        let event = FetchEvent::new(SourceId::random(), Uuid::new_v4(), now - age);
        prop_assert!(!decide(Some(event), now));
    }

    #[test]
    fn exactly_threshold_refreshes(now in arb_now()) {
        let created_at = now - STALENESS_THRESHOLD_SECS;
        let event = FetchEvent::new(SourceId::random(), Uuid::new_v4(), created_at);
        prop_assert!(decide(Some(event), now));
    }

    #[test]
    fn no_history_always_refreshes(now in arb_now()) {
        prop_assert!(decide(None, now));
    }

    /// Provenance fields never change the outcome.
    #[test]
    fn only_created_at_matters(
        now in arb_now(),
        age in -100_000i64..200_000,
        hash in "[a-f0-9]{0,16}",
        version in "[0-9]\\.[0-9]\\.[0-9]",
    ) {
        let created_at = now - age;
        let bare = FetchEvent::new(SourceId::random(), Uuid::new_v4(), created_at);
        let decorated = FetchEvent::new(SourceId::random(), Uuid::new_v4(), created_at)
            .with_config_hash(hash)
            .with_connector_version(version);
        prop_assert_eq!(decide(Some(bare), now), decide(Some(decorated), now));
    }
}
