use async_trait::async_trait;
use serde_json::Value;
use crate::errors::SecdashResult;

/// Write side of the dashboard REST API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordApi: Send + Sync {
    async fn create_record(&self, endpoint: &str, payload: &Value) -> SecdashResult<()>;
}
