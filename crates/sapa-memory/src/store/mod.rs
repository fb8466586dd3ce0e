//! In-memory state store.
//!
//! Split into focused submodules:
//! - `sessions`: per-user session flags (AI mode, language, last activity)
//! - `history`: bounded per-user conversation history

mod history;
mod sessions;

#[cfg(test)]
mod tests;

pub use history::HISTORY_LIMIT;
pub use sessions::{SessionUpdate, UserSession};

use sapa_core::context::ChatTurn;
use sapa_core::language::Language;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide session and history store, keyed by Telegram user id.
///
/// Cloning is cheap and every clone shares the same state. Each map sits
/// behind its own lock so a read-modify-write on one user's entry is atomic.
#[derive(Clone)]
pub struct Store {
    sessions: Arc<RwLock<HashMap<i64, UserSession>>>,
    histories: Arc<RwLock<HashMap<i64, VecDeque<ChatTurn>>>>,
    default_language: Language,
}

impl Store {
    /// Create an empty store. `default_language` seeds new sessions and
    /// breaks detection ties.
    pub fn new(default_language: Language) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            histories: Arc::new(RwLock::new(HashMap::new())),
            default_language,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
