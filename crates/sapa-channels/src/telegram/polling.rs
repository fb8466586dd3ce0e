//! Long-polling update loop and Channel trait implementation.

use super::types::{TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sapa_core::{
    error::SapaError,
    message::{IncomingMessage, OutgoingMessage, Sender, TextFormat},
    traits::Channel,
};
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Convert an update into an inbound message.
///
/// Only text messages with a human sender are forwarded; everything else
/// returns `None` (the cursor still advances past it).
pub(crate) fn to_incoming(update: TgUpdate) -> Option<IncomingMessage> {
    let msg = update.message?;
    let text = msg.text?;
    let user = msg.from?;
    if user.is_bot {
        debug!("telegram: ignoring message from bot {}", user.id);
        return None;
    }

    let timestamp = DateTime::from_timestamp(msg.date, 0).unwrap_or_else(Utc::now);

    Some(IncomingMessage {
        id: Uuid::new_v4(),
        update_id: update.update_id,
        chat_id: msg.chat.id,
        sender: Sender {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
        },
        text,
        timestamp,
    })
}

/// `getUpdates` offset for a cursor: one past the last seen update.
pub(crate) fn next_offset(cursor: Option<i64>) -> Option<i64> {
    cursor.map(|id| id + 1)
}

/// Query string for one `getUpdates` call.
pub(crate) fn poll_query(offset: Option<i64>, poll_timeout: u64) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("timeout", poll_timeout.to_string()),
        ("allowed_updates", r#"["message"]"#.to_string()),
    ];
    if let Some(off) = offset {
        query.push(("offset", off.to_string()));
    }
    query
}

/// Split a batch into the new cursor and the updates not seen before.
///
/// The cursor moves past every update in the batch, including ones that
/// `to_incoming` later drops. Updates at or below `cursor` are discarded.
pub(crate) fn take_batch(
    cursor: Option<i64>,
    updates: Vec<TgUpdate>,
) -> (Option<i64>, Vec<TgUpdate>) {
    let fresh: Vec<TgUpdate> = updates
        .into_iter()
        .filter(|u| Some(u.update_id) > cursor)
        .collect();
    let next = std::cmp::max(cursor, fresh.iter().map(|u| u.update_id).max());
    (next, fresh)
}

/// One `getUpdates` round trip.
pub(crate) async fn fetch_updates(
    client: &reqwest::Client,
    base_url: &str,
    offset: Option<i64>,
    poll_timeout: u64,
) -> Result<Vec<TgUpdate>, SapaError> {
    let resp = client
        .get(format!("{base_url}/getUpdates"))
        .query(&poll_query(offset, poll_timeout))
        .timeout(Duration::from_secs(poll_timeout + 5))
        .send()
        .await
        .map_err(|e| SapaError::Channel(format!("telegram getUpdates failed: {e}")))?;

    let body: TgResponse<Vec<TgUpdate>> = resp
        .json()
        .await
        .map_err(|e| SapaError::Channel(format!("telegram getUpdates parse failed: {e}")))?;

    body.into_result("getUpdates")
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, SapaError> {
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let poll_timeout = self.config.poll_timeout_secs;
        let retry_delay = Duration::from_secs(self.config.retry_delay_secs);
        let last_update_id = self.last_update_id.clone();
        let running = self.running.clone();
        running.store(true, Ordering::SeqCst);

        info!("telegram: starting long polling (timeout {poll_timeout}s)");

        tokio::spawn(async move {
            while running.load(Ordering::SeqCst) {
                let cursor = *last_update_id.lock().await;

                let updates =
                    match fetch_updates(&client, &base_url, next_offset(cursor), poll_timeout)
                        .await
                    {
                        Ok(u) => u,
                        Err(e) => {
                            error!("{e} (retry in {}s)", retry_delay.as_secs());
                            tokio::time::sleep(retry_delay).await;
                            continue;
                        }
                    };

                let (next, fresh) = take_batch(cursor, updates);
                *last_update_id.lock().await = next;

                for update in fresh {
                    let Some(incoming) = to_incoming(update) else {
                        continue;
                    };
                    if tx.send(incoming).await.is_err() {
                        info!("telegram: receiver dropped, stopping poll");
                        return;
                    }
                }
            }
            info!("telegram: polling stopped");
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), SapaError> {
        let markdown = message.format == TextFormat::Markdown;
        self.send_text(message.chat_id, &message.text, markdown)
            .await
    }

    async fn send_typing(&self, chat_id: i64) -> Result<(), SapaError> {
        self.send_chat_action(chat_id, "typing").await
    }

    async fn stop(&self) -> Result<(), SapaError> {
        self.running.store(false, Ordering::SeqCst);
        info!("telegram: channel stopped");
        Ok(())
    }
}
