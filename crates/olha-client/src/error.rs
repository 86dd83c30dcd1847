//! Error types for olha-client

use thiserror::Error;

/// Every variant carries either the transport failure message or the
/// server's response body text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base origin could not be parsed or the HTTP client could not be built
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Login rejected or unreachable
    #[error("login failed: {0}")]
    Auth(String),

    /// Registration rejected or unreachable
    #[error("registration failed: {0}")]
    Registration(String),

    /// Listing a resource failed
    #[error("an error occurred while fetching {resource}: {detail}")]
    Fetch {
        resource: &'static str,
        detail: String,
    },

    /// Channel creation failed
    #[error("an error occurred while creating the channel: {0}")]
    Create(String),

    /// Channel deletion failed
    #[error("an error occurred while deleting the channel: {0}")]
    Delete(String),

    /// Health endpoint unreachable or reporting unhealthy
    #[error("health check failed: {0}")]
    Health(String),
}

impl ClientError {
    /// The wrapped diagnostic text, without the operation prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Config(d)
            | Self::Auth(d)
            | Self::Registration(d)
            | Self::Create(d)
            | Self::Delete(d)
            | Self::Health(d) => d,
            Self::Fetch { detail, .. } => detail,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;
