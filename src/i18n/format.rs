//! Composite replies assembled from a language bundle.

use super::{messages, Messages};
use sapa_core::language::Language;
use sapa_core::weather::WeatherSnapshot;
use sapa_weather::{format_temperature, format_visibility, weather_emoji, Suitability};

/// Escape dynamic text for Telegram's legacy Markdown.
pub fn md_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `/start` greeting (plain text).
pub fn welcome(lang: Language) -> String {
    let w = &messages(lang).welcome;
    format!(
        "{}\n\n{}\n\n{}\n{}\n{}\n{}\n{}\n\n{}",
        w.title, w.description, w.usage, w.ai_mode, w.ai_off, w.weather, w.help, w.start
    )
}

/// `/help` text (plain text).
pub fn help(lang: Language) -> String {
    let m = messages(lang);
    let h = &m.help;
    let c = &m.commands;
    let commands = [
        c.start,
        c.help,
        c.clear,
        c.ai,
        c.ai_off,
        c.weather,
        c.workout,
        c.reminder,
        c.stop_reminder,
    ]
    .join("\n");
    let features = h.feature_lines.join("\n");
    format!(
        "{}\n\n{}\n{commands}\n\n{}\n{features}\n\n{}\n{}\n{}\n{}\n\n{}",
        h.title,
        h.commands,
        h.features,
        h.tips,
        h.ai_activation,
        h.weather_auto,
        h.reminders,
        h.start_message
    )
}

/// Sentence explaining a suitability outcome.
pub fn suitability_reason(lang: Language, suitability: Suitability) -> &'static str {
    let s = &messages(lang).suitability;
    match suitability {
        Suitability::Perfect => s.perfect,
        Suitability::Rainy => s.rainy,
        Suitability::Thunderstorm => s.thunderstorm,
        Suitability::TooCold => s.too_cold,
        Suitability::TooHot => s.too_hot,
        Suitability::HighHumidity => s.high_humidity,
        Suitability::StrongWind => s.strong_wind,
    }
}

fn temperature_line(m: &Messages, snap: &WeatherSnapshot) -> String {
    let w = &m.weather;
    match snap.feels_like_c {
        Some(feels) => format!(
            "{} {} ({} {})",
            w.temperature,
            format_temperature(snap.temperature_c),
            w.feels_like,
            format_temperature(feels)
        ),
        None => format!("{} {}", w.temperature, format_temperature(snap.temperature_c)),
    }
}

/// Detail lines shared by the weather and workout reports.
fn detail_lines(m: &Messages, snap: &WeatherSnapshot, emoji: &str) -> Vec<String> {
    let w = &m.weather;
    let mut lines = vec![
        format!("{} {}", w.location, md_escape(&snap.location)),
        format!("{emoji} {} {}", w.condition, md_escape(&snap.description)),
        temperature_line(m, snap),
        format!("{} {}%", w.humidity, snap.humidity.round() as i64),
        format!("{} {:.1} m/s", w.wind_speed, snap.wind_speed_ms),
    ];
    if let Some(vis) = snap.visibility_m {
        lines.push(format!("{} {}", w.visibility, format_visibility(vis)));
    }
    if !snap.observed_at.is_empty() {
        lines.push(format!("{} {}", w.time, md_escape(&snap.observed_at)));
    }
    lines
}

fn source_line(m: &Messages, attribution: &str) -> String {
    format!("_{} {}_", m.weather.data_source, md_escape(attribution))
}

/// Current-weather report (Markdown).
pub fn current_weather(lang: Language, snap: &WeatherSnapshot, attribution: &str) -> String {
    let m = messages(lang);
    let emoji = weather_emoji(&snap.description_en);
    let details = detail_lines(m, snap, emoji).join("\n");
    format!(
        "{emoji} *{}*\n\n{details}\n\n{}",
        m.weather.current_weather,
        source_line(m, attribution)
    )
}

/// Workout suitability report (Markdown).
pub fn workout_report(
    lang: Language,
    snap: &WeatherSnapshot,
    suitability: Suitability,
    attribution: &str,
) -> String {
    let m = messages(lang);
    let w = &m.weather;
    let emoji = weather_emoji(&snap.description_en);
    let details = detail_lines(m, snap, emoji).join("\n");
    let source = source_line(m, attribution);
    let reason = suitability_reason(lang, suitability);

    if suitability.is_suitable() {
        format!(
            "{} {emoji}\n\n{details}\n\n{source}\n\n✅ {reason}\n\n{}\n{}\n{}\n{}\n{}\n\n{}",
            w.good_for_workout,
            w.recommendations,
            w.use_proper_clothing,
            w.stay_hydrated,
            w.warm_up,
            w.choose_right_time,
            w.enjoy_workout
        )
    } else {
        format!(
            "{}\n\n{details}\n\n{source}\n\n⚠️ {reason}\n\n{}\n{}\n{}\n{}\n{}\n{}\n\n{}",
            w.not_good_for_workout,
            w.indoor_alternatives,
            w.home_workout,
            w.yoga,
            w.dance,
            w.shadow_boxing,
            w.active_games,
            w.keep_spirit
        )
    }
}

/// `/reminder` confirmation when a new reminder was started (Markdown).
pub fn reminder_enabled(lang: Language, time: &str, location: &str, timezone: &str) -> String {
    let m = messages(lang);
    let r = &m.reminder;
    format!(
        "{}\n\n{} {}\n{} {}\n{} {}\n\n{}\n\n{}",
        m.replies.reminder_enabled,
        r.weekend_time,
        md_escape(time),
        r.location,
        md_escape(location),
        r.timezone,
        md_escape(timezone),
        r.weather_check,
        r.stop_instruction
    )
}

/// Compact weather block used by the weekend reminder.
fn weekly_weather_block(m: &Messages, snap: &WeatherSnapshot) -> String {
    let w = &m.weather;
    format!(
        "📍 *{} {}:*\n{}\n{} {}%\n{} {:.1} m/s\n{} {}",
        w.weather_in,
        md_escape(&snap.location),
        temperature_line(m, snap),
        w.humidity,
        snap.humidity.round() as i64,
        w.wind_speed,
        snap.wind_speed_ms,
        w.condition,
        md_escape(&snap.description)
    )
}

/// Weekend reminder when the weather favours jogging (Markdown).
pub fn weekly_good(lang: Language, snap: &WeatherSnapshot, suitability: Suitability) -> String {
    let m = messages(lang);
    let wk = &m.weekly;
    let g = &wk.good;
    let emoji = weather_emoji(&snap.description_en);
    format!(
        "{}\n\n{} {emoji}\n\n{}\n\n{} 🌟\n\n{}\n{}\n{}\n{}\n{}\n\n{}",
        wk.title_good,
        g.greeting,
        weekly_weather_block(m, snap),
        suitability_reason(lang, suitability),
        g.tips_title,
        g.weather_clothing,
        g.bring_water,
        g.warm_up_cool_down,
        g.choose_route,
        g.lets_start
    )
}

/// Weekend reminder suggesting indoor alternatives (Markdown).
pub fn weekly_bad(lang: Language, snap: &WeatherSnapshot, suitability: Suitability) -> String {
    let m = messages(lang);
    let wk = &m.weekly;
    let b = &wk.bad;
    let emoji = weather_emoji(&snap.description_en);
    format!(
        "{}\n\n{} {emoji}\n\n{}\n\n⚠️ {}\n\n{}\n{}\n{}\n{}\n{}\n{}\n\n{}",
        wk.title_bad,
        b.greeting,
        weekly_weather_block(m, snap),
        suitability_reason(lang, suitability),
        b.alternatives_title,
        b.home_workout,
        b.yoga,
        b.dance_workout,
        b.shadow_boxing,
        b.active_games,
        b.keep_spirit
    )
}

/// Weekend reminder without weather data (Markdown).
pub fn weekly_basic(lang: Language) -> String {
    let b = &messages(lang).weekly.basic;
    format!(
        "{}\n\n{}\n\n{}\n{}\n{}\n{}\n\n{}",
        b.title, b.greeting, b.dont_forget, b.warm_up, b.stay_hydrated, b.comfortable_shoes, b.enjoy
    )
}

/// Weekend reminder sent when the weather fetch failed (Markdown).
pub fn weekly_fallback(lang: Language) -> String {
    let f = &messages(lang).weekly.fallback;
    format!(
        "{}\n\n{}\n\n{}\n\n{}\n{}\n{}\n{}\n\n{}",
        f.title,
        f.greeting,
        f.weather_error,
        f.suggestions,
        f.check_weather,
        f.sunny_activity,
        f.rainy_activity,
        f.enjoy
    )
}
