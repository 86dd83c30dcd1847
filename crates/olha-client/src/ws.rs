//! WebSocket addressing for the live chat stream.
//!
//! Only the URL is built here; the socket itself is owned by whoever renders
//! the chat.

use olha_types::models::{ChannelId, UserId};
use url::Url;

use crate::error::{ClientError, Result};

/// Host used when no page origin is known (local development server).
pub const DEV_WS_HOST: &str = "localhost:8080";

/// Routing unit of the live socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WsRoute {
    /// `/api/ws/{channel_id}/{user_id}`: one socket per joined channel.
    /// Older servers only.
    PerChannel {
        channel_id: ChannelId,
        user_id: UserId,
    },
    /// `/api/ws/{user_id}`: one socket per user, channel chosen in-band.
    PerUser { user_id: UserId },
}

impl WsRoute {
    fn path(&self) -> String {
        match self {
            Self::PerChannel { channel_id, user_id } => {
                format!("/api/ws/{}/{}", channel_id, user_id)
            }
            Self::PerUser { user_id } => format!("/api/ws/{}", user_id),
        }
    }
}

/// Scheme security and `host[:port]` of the origin the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    pub secure: bool,
    pub host: String,
}

impl PageOrigin {
    pub fn parse(origin: &str) -> Result<Self> {
        let url = Url::parse(origin)
            .map_err(|e| ClientError::Config(format!("invalid origin '{}': {}", origin, e)))?;

        let host = url
            .host_str()
            .ok_or_else(|| ClientError::Config(format!("origin '{}' has no host", origin)))?;

        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            secure: url.scheme() == "https",
            host,
        })
    }

    fn scheme(&self) -> &'static str {
        if self.secure { "wss:" } else { "ws:" }
    }
}

/// Build the live socket URL. Without an origin, falls back to plain `ws:` on
/// [`DEV_WS_HOST`].
pub fn ws_url(origin: Option<&PageOrigin>, route: WsRoute) -> String {
    let (scheme, host) = match origin {
        Some(o) => (o.scheme(), o.host.as_str()),
        None => ("ws:", DEV_WS_HOST),
    };
    format!("{}//{}{}", scheme, host, route.path())
}
