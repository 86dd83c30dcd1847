use reqwest::Client;

use olha_types::api::HealthStatus;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::http::exchange;

#[derive(Debug, Clone)]
pub struct HealthClient {
    http: Client,
    url: String,
}

impl HealthClient {
    pub fn new(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            url: config.resource("health"),
        }
    }

    /// An unhealthy server answers 503, which surfaces as [`ClientError::Health`]
    /// carrying the JSON body.
    pub async fn check(&self) -> Result<HealthStatus> {
        let req = self.http.get(&self.url);
        exchange(&self.http, req).await.map_err(ClientError::Health)
    }
}
