use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

pub type UserId = i64;
pub type ChannelId = i64;
pub type MessageId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "user_id_from_number_or_string")]
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    /// The server sends `""` or `null` for channels created without one.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub created_by: UserId,
    #[serde(default)]
    pub created_by_username: String,
    /// Kept with the server's offset.
    pub created_at: DateTime<FixedOffset>,
}

/// A stored chat message as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    pub user_username: String,
    /// Missing on messages from servers that predate per-user colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_color: Option<String>,
    pub content: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// Early clients typed user ids as strings; accept both shapes.
fn user_id_from_number_or_string<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(UserId),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid user id '{}'", text))),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
