//! Weekly workout reminder: one Saturday timer, started and stopped on demand.

use crate::i18n;
use chrono::{DateTime, Datelike, Duration, FixedOffset, Utc, Weekday};
use sapa_core::error::SapaError;
use sapa_core::message::OutgoingMessage;
use sapa_core::traits::{Channel, WeatherSource};
use sapa_memory::Store;
use sapa_weather::assess_workout;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// The reminder always fires on this weekday.
pub const REMINDER_WEEKDAY: Weekday = Weekday::Sat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,
    NotActive,
}

/// Next `weekday` at `hour:minute` strictly after `now`, in `now`'s offset.
pub fn next_weekly_fire(
    now: DateTime<FixedOffset>,
    weekday: Weekday,
    hour: u32,
    minute: u32,
) -> Option<DateTime<FixedOffset>> {
    let days_ahead = (7 + weekday.num_days_from_monday() - now.weekday().num_days_from_monday()) % 7;
    let date = now.date_naive() + Duration::days(i64::from(days_ahead));
    let at = |date: chrono::NaiveDate| {
        date.and_hms_opt(hour, minute, 0)?
            .and_local_timezone(now.timezone())
            .single()
    };

    let candidate = at(date)?;
    if candidate > now {
        Some(candidate)
    } else {
        at(date + Duration::days(7))
    }
}

/// Everything a firing needs. Cloned into the timer task.
#[derive(Clone)]
struct ReminderJob {
    channel: Arc<dyn Channel>,
    weather: Option<Arc<dyn WeatherSource>>,
    store: Store,
    hour: u32,
    minute: u32,
    offset: FixedOffset,
}

impl ReminderJob {
    /// Build and send one reminder to `target`.
    async fn fire(&self, target: i64) -> Result<(), SapaError> {
        let lang = self
            .store
            .get_session(target)
            .await
            .map(|s| s.language)
            .unwrap_or_else(|| self.store.default_language());

        let text = match &self.weather {
            None => i18n::weekly_basic(lang),
            Some(source) => match source.current(lang).await {
                Ok(snap) => {
                    let suitability = assess_workout(&snap);
                    info!("reminder: weather at {} is {suitability:?}", snap.location);
                    if suitability.is_suitable() {
                        i18n::weekly_good(lang, &snap, suitability)
                    } else {
                        i18n::weekly_bad(lang, &snap, suitability)
                    }
                }
                Err(e) => {
                    warn!("reminder: weather check failed, sending fallback: {e}");
                    i18n::weekly_fallback(lang)
                }
            },
        };

        self.channel
            .send(OutgoingMessage::markdown(target, text))
            .await
    }

    /// Sleep until each Saturday slot and fire, until `cancel` flips or is dropped.
    async fn run(self, target: i64, mut cancel: watch::Receiver<bool>) {
        loop {
            let now = Utc::now().with_timezone(&self.offset);
            let Some(next) = next_weekly_fire(now, REMINDER_WEEKDAY, self.hour, self.minute)
            else {
                error!("reminder: cannot compute next firing time, stopping");
                return;
            };
            let wait = (next - now).to_std().unwrap_or_default();
            info!("reminder: next firing for {target} at {next}");

            tokio::select! {
                _ = tokio::time::sleep(wait) => {
                    info!("reminder: sending weekly reminder to {target}");
                    if let Err(e) = self.fire(target).await {
                        error!("reminder: failed to send to {target}: {e}");
                    }
                }
                _ = cancel.changed() => {
                    info!("reminder: timer for {target} cancelled");
                    return;
                }
            }
        }
    }
}

struct ActiveReminder {
    target: i64,
    cancel: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// The single weekly reminder timer. At most one is active.
pub struct WeeklyReminder {
    job: ReminderJob,
    active: Mutex<Option<ActiveReminder>>,
}

impl WeeklyReminder {
    pub fn new(
        channel: Arc<dyn Channel>,
        weather: Option<Arc<dyn WeatherSource>>,
        store: Store,
        hour: u32,
        minute: u32,
        offset: FixedOffset,
    ) -> Self {
        Self {
            job: ReminderJob {
                channel,
                weather,
                store,
                hour,
                minute,
                offset,
            },
            active: Mutex::new(None),
        }
    }

    /// Start the timer for `target`. A running timer is left untouched.
    pub async fn start(&self, target: i64) -> Result<StartOutcome, SapaError> {
        let mut active = self.active.lock().await;
        if let Some(current) = active.as_ref() {
            if !current.handle.is_finished() {
                info!("reminder: already active for {}", current.target);
                return Ok(StartOutcome::AlreadyActive);
            }
        }

        let now = Utc::now().with_timezone(&self.job.offset);
        if next_weekly_fire(now, REMINDER_WEEKDAY, self.job.hour, self.job.minute).is_none() {
            return Err(SapaError::Config(format!(
                "invalid reminder time {:02}:{:02}",
                self.job.hour, self.job.minute
            )));
        }

        let (cancel, cancel_rx) = watch::channel(false);
        let handle = tokio::spawn(self.job.clone().run(target, cancel_rx));
        *active = Some(ActiveReminder {
            target,
            cancel,
            handle,
        });
        info!(
            "reminder: started for {target}, every Saturday {:02}:{:02} ({})",
            self.job.hour, self.job.minute, self.job.offset
        );
        Ok(StartOutcome::Started)
    }

    /// Stop the timer. A firing already in progress still completes.
    pub async fn stop(&self) -> StopOutcome {
        let mut active = self.active.lock().await;
        match active.take() {
            Some(current) if !current.handle.is_finished() => {
                let _ = current.cancel.send(true);
                info!("reminder: stopped for {}", current.target);
                StopOutcome::Stopped
            }
            _ => StopOutcome::NotActive,
        }
    }

    /// Recipient of the running timer, if any.
    pub async fn target(&self) -> Option<i64> {
        self.active
            .lock()
            .await
            .as_ref()
            .filter(|current| !current.handle.is_finished())
            .map(|current| current.target)
    }

    /// Send one reminder to `target` right away, outside the schedule.
    pub async fn fire_now(&self, target: i64) -> Result<(), SapaError> {
        self.job.fire(target).await
    }
}
