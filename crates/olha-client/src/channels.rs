use reqwest::Client;
use tracing::info;

use olha_types::api::{CreateChannelRequest, DeleteChannelResponse};
use olha_types::models::{Channel, ChannelId, UserId};

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::http::{exchange, exchange_text};

#[derive(Debug, Clone)]
pub struct ChannelClient {
    http: Client,
    base: String,
}

impl ChannelClient {
    pub fn new(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base: config.resource("channels"),
        }
    }

    pub async fn list_channels(&self) -> Result<Vec<Channel>> {
        let req = self.http.get(&self.base);

        exchange(&self.http, req)
            .await
            .map_err(|detail| ClientError::Fetch {
                resource: "channels",
                detail,
            })
    }

    pub async fn create_channel(
        &self,
        name: &str,
        description: Option<&str>,
        user_id: UserId,
    ) -> Result<Channel> {
        let body = CreateChannelRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
            user_id,
        };
        let req = self.http.post(&self.base).json(&body);

        exchange(&self.http, req).await.map_err(ClientError::Create)
    }

    /// Delete `channel_id` on behalf of `user_id`.
    ///
    /// The reference server hard-deletes and only lets the creator do it, so
    /// repeating the call fails with a "Channel not found" [`ClientError::Delete`].
    pub async fn delete_channel(&self, channel_id: ChannelId, user_id: UserId) -> Result<()> {
        let url = format!("{}/{}/users/{}", self.base, channel_id, user_id);
        let req = self.http.delete(url);

        let body = exchange_text(&self.http, req)
            .await
            .map_err(ClientError::Delete)?;

        // Older servers answer with an empty body
        match serde_json::from_str::<DeleteChannelResponse>(&body) {
            Ok(resp) => info!("Channel {} deleted: {}", resp.channel_id, resp.message),
            Err(_) => info!("Channel {} deleted", channel_id),
        }

        Ok(())
    }
}
