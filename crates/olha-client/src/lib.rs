//! HTTP clients for the Olha chat API.
//!
//! Each client maps one method to one request against `{origin}/api/...` and
//! wraps every failure (non-success status or transport error) into a
//! [`ClientError`]. Nothing is retried.

pub mod channels;
pub mod config;
pub mod error;
pub mod health;
mod http;
pub mod messages;
pub mod users;
pub mod ws;

use reqwest::Client;

pub use channels::ChannelClient;
pub use config::ApiConfig;
pub use error::{ClientError, Result};
pub use health::HealthClient;
pub use messages::MessageClient;
pub use users::UserClient;
pub use ws::{PageOrigin, WsRoute, ws_url};

/// All clients over one shared connection pool.
#[derive(Debug, Clone)]
pub struct ChatApi {
    pub users: UserClient,
    pub channels: ChannelClient,
    pub messages: MessageClient,
    pub health: HealthClient,
    config: ApiConfig,
}

impl ChatApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        Self {
            users: UserClient::new(http.clone(), &config),
            channels: ChannelClient::new(http.clone(), &config),
            messages: MessageClient::new(http.clone(), &config),
            health: HealthClient::new(http, &config),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Live socket URL on the configured origin.
    pub fn ws_url(&self, route: WsRoute) -> String {
        ws_url(Some(self.config.page_origin()), route)
    }
}
