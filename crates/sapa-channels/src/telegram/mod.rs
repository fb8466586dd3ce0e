//! Telegram Bot API channel.
//!
//! Uses long polling via `getUpdates` and `sendMessage` for responses.
//! Docs: <https://core.telegram.org/bots/api>

mod polling;
pub(crate) mod send;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use sapa_core::config::TelegramConfig;
use sapa_core::error::SapaError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use types::{TgResponse, TgUser};

/// Telegram message size limit in bytes.
pub(crate) const MAX_MESSAGE_LEN: usize = 4096;

/// Identity of the bot as reported by `getMe`.
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: i64,
    pub username: String,
    pub first_name: String,
}

/// Telegram channel using the Bot API with long polling.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
    /// Tracks the last update_id to avoid reprocessing.
    last_update_id: Arc<Mutex<Option<i64>>>,
    /// Cleared by `stop()`; the poll task exits on its next iteration.
    running: Arc<AtomicBool>,
}

impl TelegramChannel {
    /// Create a new Telegram channel from config.
    pub fn new(config: TelegramConfig) -> Self {
        let base_url = format!("https://api.telegram.org/bot{}", config.bot_token);
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
            last_update_id: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Verify the bot token by calling `getMe`.
    pub async fn get_me(&self) -> Result<BotInfo, SapaError> {
        let url = format!("{}/getMe", self.base_url);
        let body: TgResponse<TgUser> = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SapaError::Channel(format!("telegram getMe failed: {e}")))?
            .json()
            .await
            .map_err(|e| SapaError::Channel(format!("telegram getMe parse failed: {e}")))?;

        let user = body.into_result("getMe")?;
        let info = BotInfo {
            id: user.id,
            username: user.username.unwrap_or_default(),
            first_name: user.first_name.unwrap_or_default(),
        };
        info!(
            "telegram: connected as @{} ({})",
            info.username, info.first_name
        );
        Ok(info)
    }
}
