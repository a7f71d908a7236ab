use catalog_core::models::{FetchEvent, RefreshDecision};

/// Classify the latest fetch against `threshold_secs`, as seen at `now_secs`.
///
/// Only `created_at` is read. A fetch exactly `threshold_secs` old is stale.
pub fn evaluate(last: Option<&FetchEvent>, now_secs: i64, threshold_secs: i64) -> RefreshDecision {
    let Some(event) = last else {
        return RefreshDecision::NeverFetched;
    };

    let last_fetched_at = event.created_at;
    let elapsed_secs = event.elapsed_secs(now_secs);
    if elapsed_secs >= threshold_secs {
        RefreshDecision::Stale {
            last_fetched_at,
            elapsed_secs,
        }
    } else {
        RefreshDecision::Fresh {
            last_fetched_at,
            elapsed_secs,
        }
    }
}
