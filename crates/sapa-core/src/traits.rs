use crate::{
    context::Context,
    error::SapaError,
    language::Language,
    message::{IncomingMessage, OutgoingMessage},
    weather::WeatherSnapshot,
};
use async_trait::async_trait;

/// Chat-completion provider trait.
///
/// Every completion backend implements this trait to provide a uniform interface.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Send a conversation context to the provider and get the completion text.
    async fn complete(&self, context: &Context) -> Result<String, SapaError>;
}

/// Messaging channel trait.
///
/// The transport implements this trait to receive and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages in transport order.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, SapaError>;

    /// Send a message through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), SapaError>;

    /// Send a typing indicator to show the bot is processing.
    async fn send_typing(&self, _chat_id: i64) -> Result<(), SapaError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), SapaError>;
}

/// Current-conditions weather source for one configured location.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Short source name used in logs.
    fn name(&self) -> &str;

    /// Data-source attribution shown to users (e.g. "BMKG").
    fn attribution(&self) -> &str;

    /// Fetch the current conditions, with descriptions in `language` where supported.
    async fn current(&self, language: Language) -> Result<WeatherSnapshot, SapaError>;
}
