use crate::constants::STALENESS_THRESHOLD_SECS;

pub const DEFAULT_AUTO_DETECT_SCHEMA: bool = true;
pub const DEFAULT_STALENESS_THRESHOLD_SECS: u64 = STALENESS_THRESHOLD_SECS as u64;
pub const DEFAULT_DISABLE_DISCOVER_CACHE: bool = true;

pub const DEFAULT_DB_PATH: &str = "catalog.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";
