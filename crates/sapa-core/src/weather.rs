//! Weather data shared between weather sources and the gateway.

use serde::{Deserialize, Serialize};

/// Coarse weather condition derived by each source from its own data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Fog,
    Haze,
    Squall,
    Tornado,
    Unknown,
}

/// Current conditions at one location. Consumed per request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location label (city or regency name).
    pub location: String,
    /// Human-readable description in the requested language.
    pub description: String,
    /// English description used for emoji selection.
    pub description_en: String,
    pub condition: WeatherCondition,
    pub temperature_c: f64,
    #[serde(default)]
    pub feels_like_c: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in metres per second.
    pub wind_speed_ms: f64,
    /// Visibility in metres, if reported.
    #[serde(default)]
    pub visibility_m: Option<f64>,
    /// Observation (or forecast slot) time, already rendered for display.
    pub observed_at: String,
}
