//! Message routing: session refresh, intent classification, and the reply paths.

use super::keywords::{classify, Intent};
use super::Gateway;
use crate::commands::{self, Command, CommandContext, Reply};
use crate::i18n;
use rand::seq::SliceRandom;
use sapa_channels::utils::preview;
use sapa_core::language::Language;
use sapa_core::message::{IncomingMessage, OutgoingMessage};
use tracing::{error, info, warn};

impl Gateway {
    /// Route one inbound message and send its reply.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        info!(
            "{} ({}) says: {}",
            incoming.sender.display_name(),
            incoming.sender.id,
            preview(&incoming.text, 60)
        );

        let chat_id = incoming.chat_id;
        let reply = self.route(&incoming).await;
        self.deliver(reply.into_outgoing(chat_id)).await;
    }

    /// Pick the reply for a message. Every downstream failure has already been
    /// mapped to a localized reply by the time this returns.
    async fn route(&self, incoming: &IncomingMessage) -> Reply {
        let user_id = incoming.sender.id;
        let chat_id = incoming.chat_id;
        let session = self.memory.touch(user_id, &incoming.text).await;
        let lang = session.language;

        match classify(&incoming.text) {
            Intent::Command(token) => {
                let cmd = Command::parse(&token);
                if cmd.fetches_weather() {
                    self.typing(chat_id).await;
                }
                let ctx = CommandContext {
                    store: &self.memory,
                    user_id,
                    chat_id,
                    language: lang,
                    weather: self.weather.as_deref(),
                    reminder: &self.reminder,
                    reminder_config: &self.config.reminder,
                    weather_config: &self.config.weather,
                };
                commands::handle(cmd, &ctx).await
            }
            Intent::WeatherQuery => {
                self.typing(chat_id).await;
                commands::current_weather(self.weather.as_deref(), lang).await
            }
            Intent::WorkoutQuery => {
                self.typing(chat_id).await;
                commands::workout_check(self.weather.as_deref(), lang).await
            }
            Intent::FreeText if session.ai_mode => {
                self.typing(chat_id).await;
                self.ai_reply(user_id, &incoming.text, lang).await
            }
            Intent::FreeText => Reply::plain(ai_off_hint(lang)),
        }
    }

    /// Send a reply. Failures are logged and not retried.
    pub(super) async fn deliver(&self, message: OutgoingMessage) {
        let chat_id = message.chat_id;
        if let Err(e) = self.channel.send(message).await {
            error!("failed to send reply to {chat_id}: {e}");
        }
    }

    /// Reply with the localized generic error after a failed message.
    pub(super) async fn send_general_error(&self, chat_id: i64, user_id: i64) {
        let lang = self
            .memory
            .get_session(user_id)
            .await
            .map(|s| s.language)
            .unwrap_or_else(|| self.memory.default_language());
        let text = i18n::messages(lang).replies.general_error;
        self.deliver(OutgoingMessage::plain(chat_id, text)).await;
    }

    async fn typing(&self, chat_id: i64) {
        if let Err(e) = self.channel.send_typing(chat_id).await {
            warn!("typing indicator failed for {chat_id}: {e}");
        }
    }
}

/// One of the "AI mode is off" hints, chosen at random.
fn ai_off_hint(lang: Language) -> &'static str {
    let hints = &i18n::messages(lang).ai_off_hints;
    hints
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(hints[0])
}
