//! # sapa-providers
//!
//! Chat-completion provider implementations for Sapa.

pub mod openai;

pub use openai::OpenAiProvider;
