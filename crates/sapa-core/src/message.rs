use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The author of an incoming message, as reported by the transport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sender {
    /// Platform-specific numeric user ID.
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl Sender {
    /// Human-readable name for logs: full name, first name, `@username`, or a placeholder.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name, &self.username) {
            (Some(first), Some(last), _) => format!("{first} {last}"),
            (Some(first), None, _) => first.clone(),
            (None, _, Some(username)) => format!("@{username}"),
            _ => "Unknown User".to_string(),
        }
    }
}

/// An incoming text message from the channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Transport cursor value for this update.
    pub update_id: i64,
    /// Chat the reply must be delivered to.
    pub chat_id: i64,
    pub sender: Sender,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// How the transport should interpret outgoing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Plain,
    /// Basic markup (bold, italic) rendered by the transport.
    Markdown,
}

/// An outgoing message to send back through the channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
}

impl OutgoingMessage {
    pub fn plain(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            format: TextFormat::Plain,
        }
    }

    pub fn markdown(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            format: TextFormat::Markdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender(first: Option<&str>, last: Option<&str>, username: Option<&str>) -> Sender {
        Sender {
            id: 1,
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            username: username.map(String::from),
        }
    }

    #[test]
    fn test_display_name_precedence() {
        assert_eq!(
            sender(Some("Budi"), Some("Santoso"), Some("budi")).display_name(),
            "Budi Santoso"
        );
        assert_eq!(sender(Some("Budi"), None, Some("budi")).display_name(), "Budi");
        assert_eq!(sender(None, None, Some("budi")).display_name(), "@budi");
        assert_eq!(sender(None, None, None).display_name(), "Unknown User");
    }

    #[test]
    fn test_outgoing_constructors() {
        let msg = OutgoingMessage::markdown(42, "*hi*");
        assert_eq!(msg.chat_id, 42);
        assert_eq!(msg.format, TextFormat::Markdown);
        assert_eq!(OutgoingMessage::plain(1, "x").format, TextFormat::Plain);
    }
}
