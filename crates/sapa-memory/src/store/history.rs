//! Bounded per-user conversation history.

use super::Store;
use sapa_core::context::ChatTurn;
use std::collections::VecDeque;

/// Maximum turns kept per user. Oldest turns are evicted first.
pub const HISTORY_LIMIT: usize = 20;

impl Store {
    /// Append a turn, evicting the oldest ones beyond [`HISTORY_LIMIT`].
    /// Returns the history length after the append.
    pub async fn append_turn(&self, user_id: i64, turn: ChatTurn) -> usize {
        let mut histories = self.histories.write().await;
        let entries = histories.entry(user_id).or_insert_with(VecDeque::new);
        entries.push_back(turn);
        while entries.len() > HISTORY_LIMIT {
            entries.pop_front();
        }
        entries.len()
    }

    /// Snapshot of the history, oldest first. Empty if the user has none.
    pub async fn history(&self, user_id: i64) -> Vec<ChatTurn> {
        self.histories
            .read()
            .await
            .get(&user_id)
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Drop the user's history entirely. Returns whether anything was removed.
    pub async fn clear_history(&self, user_id: i64) -> bool {
        self.histories.write().await.remove(&user_id).is_some()
    }
}
