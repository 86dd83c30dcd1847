use tracing::debug;

use crate::error::Result;
use crate::ws::PageOrigin;

/// Environment variable holding the server origin, e.g. `https://chat.example.com`.
pub const API_BASE_ENV: &str = "OLHA_API_BASE";

/// Used when the origin is unset or empty. A native client has no page to
/// resolve relative paths against, so the development server stands in.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Server location, resolved once and handed to every client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    origin: String,
    page_origin: PageOrigin,
}

impl ApiConfig {
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        let origin = match origin.trim().trim_end_matches('/') {
            "" => DEFAULT_ORIGIN.to_string(),
            trimmed => trimmed.to_string(),
        };

        let page_origin = PageOrigin::parse(&origin)?;

        Ok(Self {
            origin,
            page_origin,
        })
    }

    /// Load `.env` if present, then read [`API_BASE_ENV`].
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let origin = std::env::var(API_BASE_ENV).unwrap_or_default();
        debug!("{}={:?}", API_BASE_ENV, origin);
        Self::new(origin)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn api_base(&self) -> String {
        format!("{}/api", self.origin)
    }

    /// `{origin}/api/{segment}`
    pub fn resource(&self, segment: &str) -> String {
        format!("{}/{}", self.api_base(), segment.trim_matches('/'))
    }

    pub fn page_origin(&self) -> &PageOrigin {
        &self.page_origin
    }
}
