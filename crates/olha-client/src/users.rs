use reqwest::Client;

use olha_types::api::AuthCredentials;
use olha_types::models::User;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::http::exchange;

/// Login and registration against `/api/users`.
///
/// No local validation: username uniqueness and password policy belong to the
/// server.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: Client,
    base: String,
}

impl UserClient {
    pub fn new(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base: config.resource("users"),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let creds = AuthCredentials::new(username, password);
        let req = self.http.post(format!("{}/login", self.base)).json(&creds);

        exchange(&self.http, req).await.map_err(ClientError::Auth)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let creds = AuthCredentials::new(username, password);
        let req = self.http.post(&self.base).json(&creds);

        exchange(&self.http, req)
            .await
            .map_err(ClientError::Registration)
    }
}
