//! Built-in bot commands: each one maps session state and collaborator results
//! onto a localized reply.

mod reminder;
mod session;
mod weather;


pub(crate) use weather::{current_weather, workout_check};

use crate::gateway::WeeklyReminder;
use crate::i18n;
use sapa_core::config::{ReminderConfig, WeatherConfig};
use sapa_core::language::Language;
use sapa_core::message::{OutgoingMessage, TextFormat};
use sapa_core::traits::WeatherSource;
use sapa_memory::Store;

/// A reply produced by a command or router path.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Markdown,
        }
    }

    pub fn into_outgoing(self, chat_id: i64) -> OutgoingMessage {
        OutgoingMessage {
            chat_id,
            text: self.text,
            format: self.format,
        }
    }
}

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub store: &'a Store,
    pub user_id: i64,
    pub chat_id: i64,
    /// The sender's session language.
    pub language: Language,
    pub weather: Option<&'a dyn WeatherSource>,
    pub reminder: &'a WeeklyReminder,
    pub reminder_config: &'a ReminderConfig,
    pub weather_config: &'a WeatherConfig,
}

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Clear,
    Ai,
    AiOff,
    Weather,
    Workout,
    Reminder,
    StopReminder,
    Unknown,
}

impl Command {
    /// Parse the first token of a `/`-prefixed message. Matching is
    /// case-insensitive and ignores an `@botname` suffix (`/help@sapa_bot`).
    pub fn parse(text: &str) -> Self {
        let Some(first) = text.split_whitespace().next() else {
            return Self::Unknown;
        };
        let cmd = first.split('@').next().unwrap_or(first).to_lowercase();
        match cmd.as_str() {
            "/start" => Self::Start,
            "/help" => Self::Help,
            "/clear" => Self::Clear,
            "/ai" => Self::Ai,
            "/ai_off" => Self::AiOff,
            "/weather" => Self::Weather,
            "/workout" => Self::Workout,
            "/reminder" => Self::Reminder,
            "/stop_reminder" => Self::StopReminder,
            _ => Self::Unknown,
        }
    }

    /// Commands that call out to a weather source.
    pub fn fetches_weather(&self) -> bool {
        matches!(self, Self::Weather | Self::Workout)
    }
}

/// Handle a command and return the reply.
pub async fn handle(cmd: Command, ctx: &CommandContext<'_>) -> Reply {
    let lang = ctx.language;
    match cmd {
        Command::Start => Reply::plain(i18n::welcome(lang)),
        Command::Help => Reply::plain(i18n::help(lang)),
        Command::Clear => session::handle_clear(ctx.store, ctx.user_id, lang).await,
        Command::Ai => session::handle_ai(ctx.store, ctx.user_id, true).await,
        Command::AiOff => session::handle_ai(ctx.store, ctx.user_id, false).await,
        Command::Weather => current_weather(ctx.weather, lang).await,
        Command::Workout => workout_check(ctx.weather, lang).await,
        Command::Reminder => reminder::handle_start(ctx).await,
        Command::StopReminder => reminder::handle_stop(ctx.reminder, lang).await,
        Command::Unknown => Reply::plain(i18n::messages(lang).replies.unknown_command),
    }
}
