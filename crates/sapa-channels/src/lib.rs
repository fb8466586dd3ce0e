//! # sapa-channels
//!
//! Messaging transport integrations for Sapa.

pub mod telegram;
pub mod utils;

pub use telegram::{BotInfo, TelegramChannel};
