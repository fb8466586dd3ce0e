//! Telegram Bot API wire types.

use sapa_core::error::SapaError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TgResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

impl<T> TgResponse<T> {
    /// Unwrap a successful response, or turn `ok: false` into a channel error.
    pub(crate) fn into_result(self, method: &str) -> Result<T, SapaError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(SapaError::Channel(format!(
                "telegram {method} error: {}",
                self.description.unwrap_or_else(|| "no result".into())
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgUpdate {
    pub update_id: i64,
    pub message: Option<TgMessage>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct TgMessage {
    pub message_id: i64,
    pub from: Option<TgUser>,
    pub chat: TgChat,
    /// Unix seconds.
    #[serde(default)]
    pub date: i64,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct TgChat {
    pub id: i64,
    /// Chat type: "private", "group", "supergroup", or "channel".
    #[serde(default, rename = "type")]
    pub chat_type: String,
}
