//! Message sending: text, chat actions, and command registration.

use super::{TelegramChannel, MAX_MESSAGE_LEN};
use crate::utils::split_message;
use sapa_core::error::SapaError;
use tracing::{info, warn};

/// Commands shown in the Telegram autocomplete menu.
pub(crate) const BOT_COMMANDS: &[(&str, &str)] = &[
    ("start", "Start the conversation"),
    ("help", "Show available commands"),
    ("clear", "Clear conversation history"),
    ("ai", "Enable AI chat mode"),
    ("ai_off", "Disable AI chat mode"),
    ("weather", "Current weather"),
    ("workout", "Is the weather good for a workout?"),
    ("reminder", "Enable the weekly workout reminder"),
    ("stop_reminder", "Stop the weekly workout reminder"),
];

impl TelegramChannel {
    /// Send a text message to a specific chat, split into 4096-byte chunks.
    ///
    /// With `markdown`, a chunk Telegram cannot parse is re-sent once as plain text.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        markdown: bool,
    ) -> Result<(), SapaError> {
        let url = format!("{}/sendMessage", self.base_url);

        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            let mut body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });
            if markdown {
                body["parse_mode"] = "Markdown".into();
            }

            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| SapaError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if status.is_success() {
                continue;
            }

            let error_text = resp.text().await.unwrap_or_default();
            if !(markdown && error_text.contains("can't parse entities")) {
                return Err(SapaError::Channel(format!(
                    "telegram send failed ({status}): {error_text}"
                )));
            }

            warn!("telegram: Markdown parse failed, retrying as plain text: {error_text}");
            let plain_body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });
            let plain_resp = self
                .client
                .post(&url)
                .json(&plain_body)
                .send()
                .await
                .map_err(|e| SapaError::Channel(format!("telegram send (plain) failed: {e}")))?;
            if !plain_resp.status().is_success() {
                let plain_err = plain_resp.text().await.unwrap_or_default();
                return Err(SapaError::Channel(format!(
                    "telegram send (plain fallback) failed: {plain_err}"
                )));
            }
        }

        Ok(())
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&commands_payload()).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("telegram: registered {} bot commands", BOT_COMMANDS.len());
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("telegram: failed to register bot commands: {body}");
            }
            Err(e) => {
                warn!("telegram: failed to register bot commands: {e}");
            }
        }
    }

    /// Send a chat action (e.g. "typing") to a chat.
    pub(crate) async fn send_chat_action(
        &self,
        chat_id: i64,
        action: &str,
    ) -> Result<(), SapaError> {
        let url = format!("{}/sendChatAction", self.base_url);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "action": action,
        });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SapaError::Channel(format!("telegram sendChatAction failed: {e}")))?;

        Ok(())
    }
}

/// `setMyCommands` request body.
pub(crate) fn commands_payload() -> serde_json::Value {
    let commands: Vec<serde_json::Value> = BOT_COMMANDS
        .iter()
        .map(|(command, description)| {
            serde_json::json!({ "command": command, "description": description })
        })
        .collect();
    serde_json::json!({ "commands": commands })
}
