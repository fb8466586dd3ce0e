//! OpenWeatherMap current-weather API.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sapa_core::{
    error::SapaError,
    language::Language,
    traits::WeatherSource,
    weather::WeatherSnapshot,
};
use serde::Deserialize;
use tracing::debug;

use crate::condition::condition_from_openweather;

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap source for one city.
pub struct OpenWeatherSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    query: String,
    /// Offset used to render the observation time.
    offset: FixedOffset,
}

impl OpenWeatherSource {
    pub fn new(
        api_key: &str,
        city: &str,
        country_code: &str,
        offset: FixedOffset,
    ) -> Result<Self, SapaError> {
        Ok(Self {
            client: crate::http_client()?,
            base_url: OPENWEATHER_URL.to_string(),
            api_key: api_key.to_string(),
            query: format!("{city},{country_code}"),
            offset,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmResponse {
    #[serde(default)]
    pub weather: Vec<OwmWeather>,
    pub main: OwmMain,
    #[serde(default)]
    pub wind: Option<OwmWind>,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub dt: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmWeather {
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmMain {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmWind {
    pub speed: f64,
}

impl OwmResponse {
    pub(crate) fn into_snapshot(self, offset: FixedOffset) -> Result<WeatherSnapshot, SapaError> {
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| SapaError::Weather("openweather: response has no conditions".into()))?;

        let observed_at = DateTime::from_timestamp(self.dt, 0)
            .map(|t| t.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        Ok(WeatherSnapshot {
            location: self.name,
            description: weather.description,
            condition: condition_from_openweather(&weather.main),
            description_en: weather.main,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity: self.main.humidity,
            wind_speed_ms: self.wind.map(|w| w.speed).unwrap_or_default(),
            visibility_m: self.visibility,
            observed_at,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    fn name(&self) -> &str {
        "openweather"
    }

    fn attribution(&self) -> &str {
        "OpenWeatherMap"
    }

    async fn current(&self, language: Language) -> Result<WeatherSnapshot, SapaError> {
        debug!("openweather: GET {} q={}", self.base_url, self.query);

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", self.query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", language.code()),
            ])
            .send()
            .await
            .map_err(|e| SapaError::Weather(format!("openweather request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(SapaError::Weather(format!("openweather returned {status}")));
        }

        let parsed: OwmResponse = resp
            .json()
            .await
            .map_err(|e| SapaError::Weather(format!("openweather: failed to parse response: {e}")))?;

        parsed.into_snapshot(self.offset)
    }
}
