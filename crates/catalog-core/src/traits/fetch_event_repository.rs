use crate::errors::CatalogResult;
use crate::models::{FetchEvent, SourceId};

/// Read access to recorded catalog fetches.
pub trait IFetchEventRepository: Send + Sync {
    /// The fetch event with the greatest `created_at` for the source, or `None` if the
    /// source was never fetched. Fails with `RepositoryReadFailure` when the read cannot
    /// complete.
    fn get_most_recent_fetch_event_for_source(
        &self,
        source_id: &SourceId,
    ) -> CatalogResult<Option<FetchEvent>>;
}
