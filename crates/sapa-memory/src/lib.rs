//! # sapa-memory
//!
//! Process-local memory for Sapa: per-user sessions, bounded conversation
//! history, and the Indonesian/English language detector. Nothing here
//! survives a restart.

pub mod language;
pub mod store;

pub use language::{detect_language, detect_language_opt, language_scores};
pub use store::{SessionUpdate, Store, UserSession, HISTORY_LIMIT};
