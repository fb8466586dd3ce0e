//! # sapa-core
//!
//! Core types, traits, configuration, and error handling for the Sapa bot.

pub mod config;
pub mod context;
pub mod error;
pub mod language;
pub mod message;
pub mod traits;
pub mod weather;
