/// A schema is stale once its most recent fetch is at least this old.
pub const STALENESS_THRESHOLD_HOURS: i64 = 24;

/// [`STALENESS_THRESHOLD_HOURS`] in seconds. Fetch events carry second precision.
pub const STALENESS_THRESHOLD_SECS: i64 = STALENESS_THRESHOLD_HOURS * 60 * 60;

/// Maximum number of read connections in the storage pool.
pub const MAX_READ_POOL_SIZE: usize = 8;
