//! Internationalization: every user-facing string, per language.
//!
//! Each language is one `static` [`Messages`] bundle with a fixed schema, so a
//! missing string is a compile error. Composite replies are assembled by the
//! `format` helpers.
//! Supported languages: Indonesian, English.

mod en;
mod format;
mod id;


pub use format::*;

use sapa_core::language::Language;

/// Return the bundle for `lang`.
pub fn messages(lang: Language) -> &'static Messages {
    match lang {
        Language::Indonesian => &id::MESSAGES,
        Language::English => &en::MESSAGES,
    }
}

/// All localized strings for one language.
pub struct Messages {
    pub welcome: Welcome,
    pub help: Help,
    pub commands: CommandList,
    pub replies: Replies,
    /// Shown at random when free text arrives with AI mode off.
    pub ai_off_hints: [&'static str; 4],
    /// System turn sent ahead of the conversation history.
    pub persona_prompt: &'static str,
    pub weather: WeatherLabels,
    pub suitability: SuitabilityTexts,
    pub reminder: ReminderTexts,
    pub weekly: WeeklyTexts,
}

pub struct Welcome {
    pub title: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub ai_mode: &'static str,
    pub ai_off: &'static str,
    pub weather: &'static str,
    pub help: &'static str,
    pub start: &'static str,
}

pub struct Help {
    pub title: &'static str,
    pub commands: &'static str,
    pub features: &'static str,
    pub feature_lines: [&'static str; 7],
    pub tips: &'static str,
    pub ai_activation: &'static str,
    pub weather_auto: &'static str,
    pub reminders: &'static str,
    pub start_message: &'static str,
}

/// One help line per command.
pub struct CommandList {
    pub start: &'static str,
    pub help: &'static str,
    pub clear: &'static str,
    pub ai: &'static str,
    pub ai_off: &'static str,
    pub weather: &'static str,
    pub workout: &'static str,
    pub reminder: &'static str,
    pub stop_reminder: &'static str,
}

pub struct Replies {
    pub history_cleared: &'static str,
    pub ai_mode_enabled: &'static str,
    pub ai_mode_disabled: &'static str,
    pub weather_unavailable: &'static str,
    pub weather_error: &'static str,
    pub workout_error: &'static str,
    pub reminder_enabled: &'static str,
    pub reminder_already_active: &'static str,
    pub reminder_stopped: &'static str,
    pub reminder_not_active: &'static str,
    pub reminder_error: &'static str,
    /// Markdown.
    pub quota_exceeded: &'static str,
    pub connection_error: &'static str,
    pub general_error: &'static str,
    pub unknown_command: &'static str,
    /// Used when the model returns no content.
    pub ai_default_response: &'static str,
}

/// Labels for weather and workout reports. Labels carry their own Markdown.
pub struct WeatherLabels {
    pub current_weather: &'static str,
    pub location: &'static str,
    pub condition: &'static str,
    pub temperature: &'static str,
    pub feels_like: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub visibility: &'static str,
    pub time: &'static str,
    /// Followed by the source attribution.
    pub data_source: &'static str,
    pub weather_in: &'static str,
    pub good_for_workout: &'static str,
    pub not_good_for_workout: &'static str,
    pub recommendations: &'static str,
    pub indoor_alternatives: &'static str,
    pub use_proper_clothing: &'static str,
    pub stay_hydrated: &'static str,
    pub warm_up: &'static str,
    pub choose_right_time: &'static str,
    pub home_workout: &'static str,
    pub yoga: &'static str,
    pub dance: &'static str,
    pub shadow_boxing: &'static str,
    pub active_games: &'static str,
    pub keep_spirit: &'static str,
    pub enjoy_workout: &'static str,
}

/// One sentence per suitability outcome.
pub struct SuitabilityTexts {
    pub perfect: &'static str,
    pub rainy: &'static str,
    pub thunderstorm: &'static str,
    pub too_cold: &'static str,
    pub too_hot: &'static str,
    pub high_humidity: &'static str,
    pub strong_wind: &'static str,
}

/// Lines of the `/reminder` confirmation.
pub struct ReminderTexts {
    pub weekend_time: &'static str,
    pub location: &'static str,
    pub timezone: &'static str,
    pub weather_check: &'static str,
    pub stop_instruction: &'static str,
}

/// Templates for the Saturday reminder.
pub struct WeeklyTexts {
    pub title_good: &'static str,
    pub title_bad: &'static str,
    pub basic: WeeklyBasic,
    pub good: WeeklyGood,
    pub bad: WeeklyBad,
    pub fallback: WeeklyFallback,
}

/// Sent when no weather source is configured.
pub struct WeeklyBasic {
    pub title: &'static str,
    pub greeting: &'static str,
    pub dont_forget: &'static str,
    pub warm_up: &'static str,
    pub stay_hydrated: &'static str,
    pub comfortable_shoes: &'static str,
    pub enjoy: &'static str,
}

pub struct WeeklyGood {
    pub greeting: &'static str,
    pub tips_title: &'static str,
    pub weather_clothing: &'static str,
    pub bring_water: &'static str,
    pub warm_up_cool_down: &'static str,
    pub choose_route: &'static str,
    pub lets_start: &'static str,
}

pub struct WeeklyBad {
    pub greeting: &'static str,
    pub alternatives_title: &'static str,
    pub home_workout: &'static str,
    pub yoga: &'static str,
    pub dance_workout: &'static str,
    pub shadow_boxing: &'static str,
    pub active_games: &'static str,
    pub keep_spirit: &'static str,
}

/// Sent when the weather fetch fails.
pub struct WeeklyFallback {
    pub title: &'static str,
    pub greeting: &'static str,
    pub weather_error: &'static str,
    pub suggestions: &'static str,
    pub check_weather: &'static str,
    pub sunny_activity: &'static str,
    pub rainy_activity: &'static str,
    pub enjoy: &'static str,
}
