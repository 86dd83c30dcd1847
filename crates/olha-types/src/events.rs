use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::{Message, UserId};

/// Color used when a message carries no per-user color.
pub const DEFAULT_CHAT_COLOR: &str = "#000000";

/// Color the server paints join/leave notifications with.
pub const NOTIFICATION_COLOR: &str = "#666666";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Chat,
    Notification,
}

/// A message as exchanged over the live WebSocket and rendered in the chat view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Absent on notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<FixedOffset>,
    pub color: String,
}

impl ChatMessage {
    pub fn notification(content: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            kind: MessageKind::Notification,
            user_id: None,
            username: String::new(),
            content: content.into(),
            timestamp,
            color: NOTIFICATION_COLOR.to_string(),
        }
    }
}

/// Turn a stored history message into its live display form.
pub fn to_chat_message(message: &Message) -> ChatMessage {
    ChatMessage {
        kind: MessageKind::Chat,
        user_id: Some(message.user_id),
        username: message.user_username.clone(),
        content: message.content.clone(),
        timestamp: message.timestamp,
        color: message
            .user_color
            .clone()
            .unwrap_or_else(|| DEFAULT_CHAT_COLOR.to_string()),
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        to_chat_message(message)
    }
}
