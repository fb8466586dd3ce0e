//! AI path: history bookkeeping around one completion call, and error
//! classification for provider failures.

use super::Gateway;
use crate::commands::Reply;
use crate::i18n;
use sapa_core::context::{ChatTurn, Context};
use sapa_core::error::SapaError;
use sapa_core::language::Language;
use sapa_core::traits::Provider;
use sapa_memory::Store;
use tracing::{info, warn};

/// User-facing category of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiFailure {
    Quota,
    Connectivity,
    Generic,
}

/// Map a provider error onto a failure category by message substring.
pub fn classify_provider_error(err: &SapaError) -> AiFailure {
    let msg = err.to_string().to_lowercase();
    if msg.contains("quota") || msg.contains("billing") {
        AiFailure::Quota
    } else if msg.contains("timeout") || msg.contains("network") {
        AiFailure::Connectivity
    } else {
        AiFailure::Generic
    }
}

/// Localized reply for a failure category. The quota message is Markdown.
pub fn failure_reply(failure: AiFailure, lang: Language) -> Reply {
    let replies = &i18n::messages(lang).replies;
    match failure {
        AiFailure::Quota => Reply::markdown(replies.quota_exceeded),
        AiFailure::Connectivity => Reply::plain(replies.connection_error),
        AiFailure::Generic => Reply::plain(replies.general_error),
    }
}

/// Record the user turn, ask the provider with persona plus full history, and
/// record the answer.
///
/// On error the user turn stays in history with no assistant turn after it.
pub async fn ask_model(
    provider: &dyn Provider,
    store: &Store,
    user_id: i64,
    text: &str,
    lang: Language,
) -> Result<String, SapaError> {
    store.append_turn(user_id, ChatTurn::user(text)).await;
    let history = store.history(user_id).await;
    let context = Context::new(i18n::messages(lang).persona_prompt, history);

    let answer = provider.complete(&context).await?;
    let answer = if answer.trim().is_empty() {
        i18n::messages(lang).replies.ai_default_response.to_string()
    } else {
        answer
    };

    store
        .append_turn(user_id, ChatTurn::assistant(answer.clone()))
        .await;
    Ok(answer)
}

impl Gateway {
    /// Run the AI path and turn any failure into a localized reply.
    pub(super) async fn ai_reply(&self, user_id: i64, text: &str, lang: Language) -> Reply {
        match ask_model(self.provider.as_ref(), &self.memory, user_id, text, lang).await {
            Ok(answer) => {
                info!(
                    "ai: {} replied to user {user_id} ({} chars)",
                    self.provider.name(),
                    answer.chars().count()
                );
                Reply::plain(answer)
            }
            Err(e) => {
                let failure = classify_provider_error(&e);
                warn!("ai: {} failed for user {user_id} ({failure:?}): {e}", self.provider.name());
                failure_reply(failure, lang)
            }
        }
    }
}
