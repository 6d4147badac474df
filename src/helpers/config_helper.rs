use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_DELIMITER, DEFAULT_REQUESTS_PER_SECOND, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_requests_per_second() -> u32 {
        DEFAULT_REQUESTS_PER_SECOND
    }

    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    pub fn default_delimiter() -> char {
        DEFAULT_DELIMITER
    }
}
