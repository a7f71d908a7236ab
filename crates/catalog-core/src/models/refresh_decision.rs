use serde::{Deserialize, Serialize};

/// Outcome of a staleness check. Computed per call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RefreshDecision {
    /// No fetch has ever been recorded for the source.
    NeverFetched,
    /// The latest fetch is at least as old as the threshold.
    Stale { last_fetched_at: i64, elapsed_secs: i64 },
    /// The latest fetch is younger than the threshold.
    Fresh { last_fetched_at: i64, elapsed_secs: i64 },
}

impl RefreshDecision {
    /// Whether a schema refresh should run now.
    pub fn should_refresh(self) -> bool {
        !matches!(self, Self::Fresh { .. })
    }

    /// `created_at` of the fetch the decision was based on, if any.
    pub fn last_fetched_at(self) -> Option<i64> {
        match self {
            Self::NeverFetched => None,
            Self::Stale { last_fetched_at, .. } | Self::Fresh { last_fetched_at, .. } => {
                Some(last_fetched_at)
            }
        }
    }
}
