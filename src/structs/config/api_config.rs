use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::enums::record_kind::RecordKind;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_requests_per_second")]
    pub requests_per_second: u32,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    /// Per-kind path overrides, keyed by kind slug.
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

impl ApiConfig {
    pub fn endpoint_for(&self, kind: RecordKind) -> &str {
        self.endpoints
            .get(kind.slug())
            .map(String::as_str)
            .unwrap_or(kind.schema().default_endpoint)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            requests_per_second: ConfigHelper::default_requests_per_second(),
            user_agent: ConfigHelper::default_user_agent(),
            endpoints: HashMap::new(),
        }
    }
}
