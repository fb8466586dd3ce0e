//! Condition mapping, display helpers and the workout suitability rule.

use sapa_core::weather::{WeatherCondition, WeatherSnapshot};

/// Outcome of the outdoor workout check. Only `Perfect` is suitable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitability {
    Perfect,
    Rainy,
    Thunderstorm,
    TooCold,
    TooHot,
    HighHumidity,
    StrongWind,
}

impl Suitability {
    pub fn is_suitable(&self) -> bool {
        matches!(self, Self::Perfect)
    }
}

/// Decide whether current conditions favour outdoor exercise.
///
/// Checked in order, first match wins: rain/drizzle, thunderstorm,
/// below 15°C, above 35°C, humidity above 85%, wind above 10 m/s.
pub fn assess_workout(snapshot: &WeatherSnapshot) -> Suitability {
    let desc = snapshot.description_en.to_lowercase();

    if matches!(
        snapshot.condition,
        WeatherCondition::Rain | WeatherCondition::Drizzle
    ) || desc.contains("rain")
        || desc.contains("drizzle")
    {
        return Suitability::Rainy;
    }
    if snapshot.condition == WeatherCondition::Thunderstorm || desc.contains("thunder") {
        return Suitability::Thunderstorm;
    }
    if snapshot.temperature_c < 15.0 {
        return Suitability::TooCold;
    }
    if snapshot.temperature_c > 35.0 {
        return Suitability::TooHot;
    }
    if snapshot.humidity > 85.0 {
        return Suitability::HighHumidity;
    }
    if snapshot.wind_speed_ms > 10.0 {
        return Suitability::StrongWind;
    }
    Suitability::Perfect
}

/// Map a BMKG weather code to a coarse condition.
pub fn condition_from_bmkg_code(code: i64) -> WeatherCondition {
    match code {
        0 => WeatherCondition::Clear,
        1..=4 => WeatherCondition::Clouds,
        5..=44 => WeatherCondition::Haze,
        45..=59 => WeatherCondition::Fog,
        60..=94 => WeatherCondition::Rain,
        95..=99 => WeatherCondition::Thunderstorm,
        _ => WeatherCondition::Unknown,
    }
}

/// Map an OpenWeatherMap `weather[].main` group to a coarse condition.
pub fn condition_from_openweather(main: &str) -> WeatherCondition {
    match main.to_lowercase().as_str() {
        "clear" => WeatherCondition::Clear,
        "clouds" => WeatherCondition::Clouds,
        "rain" => WeatherCondition::Rain,
        "drizzle" => WeatherCondition::Drizzle,
        "thunderstorm" => WeatherCondition::Thunderstorm,
        "snow" => WeatherCondition::Snow,
        "fog" | "mist" => WeatherCondition::Fog,
        "haze" | "smoke" | "dust" | "sand" | "ash" => WeatherCondition::Haze,
        "squall" => WeatherCondition::Squall,
        "tornado" => WeatherCondition::Tornado,
        _ => WeatherCondition::Unknown,
    }
}

const EMOJI_KEYWORDS: &[(&[&str], &str)] = &[
    (&["drizzle", "gerimis"], "🌦️"),
    (&["thunder", "petir"], "⛈️"),
    (&["rain", "hujan"], "🌧️"),
    (&["snow", "salju"], "❄️"),
    (&["clear", "sunny", "cerah"], "☀️"),
    (&["cloud", "berawan"], "☁️"),
    (
        &[
            "fog", "mist", "haze", "smoke", "dust", "sand", "ash", "kabut", "asap",
        ],
        "🌫️",
    ),
    (&["squall"], "💨"),
    (&["tornado"], "🌪️"),
];

/// Pick an emoji for a weather description by keyword.
pub fn weather_emoji(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    EMOJI_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, emoji)| *emoji)
        .unwrap_or("🌤️")
}

/// Whole-degree Celsius, e.g. `31°C`.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

/// Metres to kilometres with one decimal, e.g. `10.0 km`.
pub fn format_visibility(metres: f64) -> String {
    format!("{:.1} km", metres / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(condition: WeatherCondition, desc: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Jakarta".into(),
            description: desc.into(),
            description_en: desc.into(),
            condition,
            temperature_c: 28.0,
            feels_like_c: None,
            humidity: 70.0,
            wind_speed_ms: 3.0,
            visibility_m: Some(10_000.0),
            observed_at: "2025-06-07 07:00:00".into(),
        }
    }

    #[test]
    fn test_perfect_conditions() {
        let s = snapshot(WeatherCondition::Clear, "Sunny");
        assert_eq!(assess_workout(&s), Suitability::Perfect);
        assert!(assess_workout(&s).is_suitable());
    }

    #[test]
    fn test_rule_priority_order() {
        // Rain wins over every numeric threshold.
        let mut s = snapshot(WeatherCondition::Rain, "Light Rain");
        s.temperature_c = 40.0;
        s.humidity = 95.0;
        assert_eq!(assess_workout(&s), Suitability::Rainy);

        let mut s = snapshot(WeatherCondition::Thunderstorm, "Thunderstorm");
        s.temperature_c = 10.0;
        assert_eq!(assess_workout(&s), Suitability::Thunderstorm);

        let mut s = snapshot(WeatherCondition::Clouds, "Cloudy");
        s.temperature_c = 14.9;
        s.humidity = 90.0;
        assert_eq!(assess_workout(&s), Suitability::TooCold);

        let mut s = snapshot(WeatherCondition::Clear, "Clear");
        s.temperature_c = 35.1;
        s.wind_speed_ms = 20.0;
        assert_eq!(assess_workout(&s), Suitability::TooHot);

        let mut s = snapshot(WeatherCondition::Clear, "Clear");
        s.humidity = 86.0;
        s.wind_speed_ms = 20.0;
        assert_eq!(assess_workout(&s), Suitability::HighHumidity);

        let mut s = snapshot(WeatherCondition::Clear, "Clear");
        s.wind_speed_ms = 10.5;
        assert_eq!(assess_workout(&s), Suitability::StrongWind);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        let mut s = snapshot(WeatherCondition::Clear, "Clear");
        s.temperature_c = 15.0;
        s.humidity = 85.0;
        s.wind_speed_ms = 10.0;
        assert_eq!(assess_workout(&s), Suitability::Perfect);
        s.temperature_c = 35.0;
        assert_eq!(assess_workout(&s), Suitability::Perfect);
    }

    #[test]
    fn test_drizzle_is_rainy() {
        let s = snapshot(WeatherCondition::Drizzle, "Drizzle");
        assert_eq!(assess_workout(&s), Suitability::Rainy);
    }

    #[test]
    fn test_bmkg_code_ranges() {
        assert_eq!(condition_from_bmkg_code(0), WeatherCondition::Clear);
        assert_eq!(condition_from_bmkg_code(3), WeatherCondition::Clouds);
        assert_eq!(condition_from_bmkg_code(10), WeatherCondition::Haze);
        assert_eq!(condition_from_bmkg_code(45), WeatherCondition::Fog);
        assert_eq!(condition_from_bmkg_code(61), WeatherCondition::Rain);
        assert_eq!(condition_from_bmkg_code(97), WeatherCondition::Thunderstorm);
        assert_eq!(condition_from_bmkg_code(-1), WeatherCondition::Unknown);
        assert_eq!(condition_from_bmkg_code(100), WeatherCondition::Unknown);
    }

    #[test]
    fn test_openweather_groups() {
        assert_eq!(condition_from_openweather("Clear"), WeatherCondition::Clear);
        assert_eq!(condition_from_openweather("Mist"), WeatherCondition::Fog);
        assert_eq!(condition_from_openweather("Smoke"), WeatherCondition::Haze);
        assert_eq!(condition_from_openweather("Volcano"), WeatherCondition::Unknown);
    }

    #[test]
    fn test_weather_emoji() {
        assert_eq!(weather_emoji("Light Drizzle"), "🌦️");
        assert_eq!(weather_emoji("Thunderstorm"), "⛈️");
        assert_eq!(weather_emoji("Hujan Ringan"), "🌧️");
        assert_eq!(weather_emoji("Mostly Clear"), "☀️");
        assert_eq!(weather_emoji("Berawan"), "☁️");
        assert_eq!(weather_emoji("Haze"), "🌫️");
        assert_eq!(weather_emoji("Tornado"), "🌪️");
        assert_eq!(weather_emoji("something else"), "🌤️");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_temperature(30.6), "31°C");
        assert_eq!(format_temperature(-0.4), "0°C");
        assert_eq!(format_visibility(10_000.0), "10.0 km");
        assert_eq!(format_visibility(2_460.0), "2.5 km");
    }
}
