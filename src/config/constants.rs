use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "secdash";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const API_URL_ENV: &str = "SECDASH_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;
pub const DEFAULT_USER_AGENT: &str = concat!("secdash-cli/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_DELIMITER: char = ',';

pub const MONTH_FIELD: &str = "month";
pub const YEAR_FIELD: &str = "year";
pub const COUNT_FIELD: &str = "count";

pub const MIN_YEAR: i32 = 2000;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
