//! Weather and workout replies, shared by the commands and keyword routing.

use super::Reply;
use crate::i18n;
use sapa_core::language::Language;
use sapa_core::traits::WeatherSource;
use sapa_weather::assess_workout;
use tracing::{error, info};

/// Current conditions, or a localized error reply.
pub(crate) async fn current_weather(source: Option<&dyn WeatherSource>, lang: Language) -> Reply {
    let replies = &i18n::messages(lang).replies;
    let Some(source) = source else {
        return Reply::plain(replies.weather_unavailable);
    };
    match source.current(lang).await {
        Ok(snap) => Reply::markdown(i18n::current_weather(lang, &snap, source.attribution())),
        Err(e) => {
            error!("weather: {} fetch failed: {e}", source.name());
            Reply::plain(replies.weather_error)
        }
    }
}

/// Workout suitability report, or a localized error reply.
pub(crate) async fn workout_check(source: Option<&dyn WeatherSource>, lang: Language) -> Reply {
    let replies = &i18n::messages(lang).replies;
    let Some(source) = source else {
        return Reply::plain(replies.weather_unavailable);
    };
    match source.current(lang).await {
        Ok(snap) => {
            let suitability = assess_workout(&snap);
            info!("workout check at {}: {suitability:?}", snap.location);
            Reply::markdown(i18n::workout_report(
                lang,
                &snap,
                suitability,
                source.attribution(),
            ))
        }
        Err(e) => {
            error!("weather: {} fetch failed for workout check: {e}", source.name());
            Reply::plain(replies.workout_error)
        }
    }
}
