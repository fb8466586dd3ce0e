use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::defaults::*;

/// Which weather API backs `/weather` and `/workout`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSourceKind {
    /// BMKG public forecast API (no key required).
    #[default]
    Bmkg,
    /// OpenWeatherMap current weather API.
    OpenWeather,
}

impl FromStr for WeatherSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bmkg" => Ok(Self::Bmkg),
            "openweather" | "openweathermap" => Ok(Self::OpenWeather),
            other => Err(format!(
                "unknown weather source '{other}' (expected 'bmkg' or 'openweather')"
            )),
        }
    }
}

/// Weather source config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub source: WeatherSourceKind,
    /// BMKG level-4 region code.
    #[serde(default = "default_weather_location")]
    pub location: String,
    /// OpenWeatherMap API key. Empty disables the OpenWeatherMap source.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            source: WeatherSourceKind::default(),
            location: default_weather_location(),
            api_key: String::new(),
            city: default_city(),
            country_code: default_country_code(),
        }
    }
}

impl WeatherConfig {
    /// Human-readable location for the configured source.
    pub fn location_label(&self) -> String {
        match self.source {
            WeatherSourceKind::Bmkg => self.location.clone(),
            WeatherSourceKind::OpenWeather => format!("{}, {}", self.city, self.country_code),
        }
    }
}
