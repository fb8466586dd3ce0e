//! /reminder and /stop_reminder.

use super::{CommandContext, Reply};
use crate::gateway::{StartOutcome, StopOutcome, WeeklyReminder};
use crate::i18n;
use sapa_core::language::Language;
use tracing::error;

/// Start the weekly reminder for the configured target, or for this chat.
pub(super) async fn handle_start(ctx: &CommandContext<'_>) -> Reply {
    let lang = ctx.language;
    let replies = &i18n::messages(lang).replies;
    let target = ctx.reminder_config.target_user.unwrap_or(ctx.chat_id);

    match ctx.reminder.start(target).await {
        Ok(StartOutcome::Started) => Reply::markdown(i18n::reminder_enabled(
            lang,
            &ctx.reminder_config.time,
            &ctx.weather_config.location_label(),
            &ctx.reminder_config.timezone,
        )),
        Ok(StartOutcome::AlreadyActive) => Reply::plain(replies.reminder_already_active),
        Err(e) => {
            error!("reminder: failed to start for {target}: {e}");
            Reply::plain(replies.reminder_error)
        }
    }
}

pub(super) async fn handle_stop(reminder: &WeeklyReminder, lang: Language) -> Reply {
    let replies = &i18n::messages(lang).replies;
    match reminder.stop().await {
        StopOutcome::Stopped => Reply::plain(replies.reminder_stopped),
        StopOutcome::NotActive => Reply::plain(replies.reminder_not_active),
    }
}
