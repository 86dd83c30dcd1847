use reqwest::Client;

use olha_types::models::{ChannelId, Message};

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::http::exchange;

#[derive(Debug, Clone)]
pub struct MessageClient {
    http: Client,
    base: String,
}

impl MessageClient {
    pub fn new(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base: config.resource("messages"),
        }
    }

    /// Stored messages of a channel, in the order the server returns them.
    pub async fn get_history(&self, channel_id: ChannelId) -> Result<Vec<Message>> {
        let req = self.http.get(format!("{}/history/{}", self.base, channel_id));

        exchange(&self.http, req)
            .await
            .map_err(|detail| ClientError::Fetch {
                resource: "history messages",
                detail,
            })
    }
}
