//! Per-user session state.

use super::Store;
use crate::language::detect_language_opt;
use chrono::{DateTime, Utc};
use sapa_core::language::Language;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ephemeral per-user state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Whether free text goes to the completion provider.
    pub ai_mode: bool,
    /// Reply language, re-resolved on every message.
    pub language: Language,
    pub last_activity: DateTime<Utc>,
}

impl UserSession {
    fn new(language: Language) -> Self {
        Self {
            ai_mode: false,
            language,
            last_activity: Utc::now(),
        }
    }
}

/// Partial session update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub ai_mode: Option<bool>,
    pub language: Option<Language>,
    pub last_activity: Option<DateTime<Utc>>,
}

impl Store {
    /// Current session for `user_id`, if one exists.
    pub async fn get_session(&self, user_id: i64) -> Option<UserSession> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Return the session for `user_id`, creating a default one if absent.
    pub async fn ensure_session(&self, user_id: i64) -> UserSession {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id)
            .or_insert_with(|| UserSession::new(self.default_language))
            .clone()
    }

    /// Merge `update` into the session (created first if absent) and return the result.
    pub async fn update_session(&self, user_id: i64, update: SessionUpdate) -> UserSession {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id)
            .or_insert_with(|| UserSession::new(self.default_language));
        if let Some(ai_mode) = update.ai_mode {
            session.ai_mode = ai_mode;
        }
        if let Some(language) = update.language {
            session.language = language;
        }
        if let Some(at) = update.last_activity {
            session.last_activity = at;
        }
        session.clone()
    }

    /// Toggle AI mode for `user_id`.
    pub async fn set_ai_mode(&self, user_id: i64, enabled: bool) -> UserSession {
        self.update_session(
            user_id,
            SessionUpdate {
                ai_mode: Some(enabled),
                ..Default::default()
            },
        )
        .await
    }

    /// Refresh a session for an inbound message: bump `last_activity` and
    /// re-resolve the language from `text`.
    ///
    /// `ai_mode` is preserved. When the text carries no language evidence
    /// an existing session keeps its language and a new one gets the default.
    pub async fn touch(&self, user_id: i64, text: &str) -> UserSession {
        let detected = detect_language_opt(text);

        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_insert_with(|| {
            debug!("memory: new session for user {user_id}");
            UserSession::new(self.default_language)
        });
        if let Some(language) = detected {
            session.language = language;
        }
        session.last_activity = Utc::now();
        session.clone()
    }
}
