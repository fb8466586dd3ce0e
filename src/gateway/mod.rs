//! Gateway: the polling loop connecting the channel, memory, the completion
//! provider, weather, and the weekly reminder.

mod ai;
mod keywords;
mod pipeline;
mod scheduler;


pub use scheduler::{StartOutcome, StopOutcome, WeeklyReminder};

use sapa_core::{
    config::Config,
    error::SapaError,
    message::IncomingMessage,
    traits::{Channel, Provider, WeatherSource},
};
use sapa_memory::Store;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The central gateway that routes messages between the channel and the reply paths.
pub struct Gateway {
    pub(super) provider: Arc<dyn Provider>,
    pub(super) channel: Arc<dyn Channel>,
    /// `None` when no weather source is usable.
    pub(super) weather: Option<Arc<dyn WeatherSource>>,
    pub(super) memory: Store,
    pub(super) reminder: Arc<WeeklyReminder>,
    pub(super) config: Config,
}

impl Gateway {
    /// Create a new gateway. Fails if the reminder schedule does not parse.
    pub fn new(
        provider: Arc<dyn Provider>,
        channel: Arc<dyn Channel>,
        weather: Option<Arc<dyn WeatherSource>>,
        memory: Store,
        config: Config,
    ) -> Result<Self, SapaError> {
        let (hour, minute) = config.reminder.hour_minute()?;
        let offset = config.reminder.offset()?;
        let reminder = Arc::new(WeeklyReminder::new(
            channel.clone(),
            weather.clone(),
            memory.clone(),
            hour,
            minute,
            offset,
        ));
        Ok(Self {
            provider,
            channel,
            weather,
            memory,
            reminder,
            config,
        })
    }

    pub fn reminder(&self) -> &Arc<WeeklyReminder> {
        &self.reminder
    }

    /// Run the main event loop until Ctrl-C or the channel closes.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "{} gateway running | provider: {} | channel: {} | weather: {}",
            self.config.bot.name,
            self.provider.name(),
            self.channel.name(),
            self.weather.as_ref().map_or("disabled", |w| w.name()),
        );

        let mut rx = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel {}: {e}", self.channel.name()))?;

        if let Some(target) = self.config.reminder.target_user {
            match self.reminder.start(target).await {
                Ok(outcome) => info!("reminder for {target}: {outcome:?}"),
                Err(e) => warn!("could not start reminder for {target}: {e}"),
            }
        }

        // Messages are handled one at a time, in transport order.
        loop {
            tokio::select! {
                incoming = rx.recv() => match incoming {
                    Some(incoming) => self.dispatch(incoming).await,
                    None => {
                        warn!("channel closed, stopping gateway");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    /// Handle one message in its own task so a panic cannot take down the loop.
    pub(super) async fn dispatch(self: &Arc<Self>, incoming: IncomingMessage) {
        let chat_id = incoming.chat_id;
        let user_id = incoming.sender.id;
        let gw = self.clone();
        let result = tokio::spawn(async move { gw.handle_message(incoming).await }).await;
        if let Err(e) = result {
            error!("message handling for user {user_id} aborted: {e}");
            self.send_general_error(chat_id, user_id).await;
        }
    }

    async fn shutdown(&self) {
        if let Some(target) = self.reminder.target().await {
            self.reminder.stop().await;
            info!("reminder for {target} stopped");
        }
        if let Err(e) = self.channel.stop().await {
            warn!("failed to stop channel {}: {e}", self.channel.name());
        }
        info!("Shutdown complete.");
    }
}
