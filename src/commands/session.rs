//! Session commands: /clear, /ai, /ai_off.

use super::Reply;
use crate::i18n;
use sapa_core::language::Language;
use sapa_memory::Store;
use tracing::info;

pub(super) async fn handle_clear(store: &Store, user_id: i64, lang: Language) -> Reply {
    if store.clear_history(user_id).await {
        info!("history cleared for user {user_id}");
    }
    Reply::plain(i18n::messages(lang).replies.history_cleared)
}

/// Toggle AI mode; the reply uses the language stored in the updated session.
pub(super) async fn handle_ai(store: &Store, user_id: i64, enabled: bool) -> Reply {
    let session = store.set_ai_mode(user_id, enabled).await;
    info!("ai mode {} for user {user_id}", if enabled { "on" } else { "off" });
    let replies = &i18n::messages(session.language).replies;
    Reply::plain(if enabled {
        replies.ai_mode_enabled
    } else {
        replies.ai_mode_disabled
    })
}
