use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::constants::{timeout_duration, REQUEST_ID_HEADER};
use crate::errors::{SecdashError, SecdashResult};
use crate::structs::config::api_config::ApiConfig;
use crate::traits::record_api::RecordApi;

#[derive(Clone)]
pub struct DashboardApiClient {
    base_url: String,
    client: Client,
}

impl DashboardApiClient {
    pub fn new(config: &ApiConfig) -> SecdashResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl RecordApi for DashboardApiClient {
    async fn create_record(&self, endpoint: &str, payload: &Value) -> SecdashResult<()> {
        let url = self.url_for(endpoint);
        let request_id = uuid::Uuid::new_v4().to_string();
        log::debug!("POST {} ({})", url, request_id);

        let response = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(payload)
            .send()
            .await
            .map_err(|e| SecdashError::NetworkError {
                operation: format!("POST {}", endpoint),
                url: Some(url.clone()),
                status_code: None,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SecdashError::api_error(endpoint, status.as_u16(), body.trim()))
    }
}
