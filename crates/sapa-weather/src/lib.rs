//! # sapa-weather
//!
//! Weather sources (BMKG, OpenWeatherMap), condition and emoji mapping, and
//! the outdoor workout suitability rule.

pub mod bmkg;
pub mod condition;
pub mod openweather;

pub use bmkg::BmkgSource;
pub use condition::{
    assess_workout, format_temperature, format_visibility, weather_emoji, Suitability,
};
pub use openweather::OpenWeatherSource;

use sapa_core::config::{WeatherConfig, WeatherSourceKind};
use sapa_core::error::SapaError;
use sapa_core::traits::WeatherSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Upper bound for one weather request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub(crate) fn http_client() -> Result<reqwest::Client, SapaError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| SapaError::Weather(format!("failed to build http client: {e}")))
}

/// Build the configured weather source.
///
/// Returns `Ok(None)` when the source cannot run with the given config
/// (OpenWeatherMap without an API key); callers treat that as "weather unavailable".
pub fn build_source(
    config: &WeatherConfig,
    offset: chrono::FixedOffset,
) -> Result<Option<Arc<dyn WeatherSource>>, SapaError> {
    match config.source {
        WeatherSourceKind::Bmkg => Ok(Some(Arc::new(BmkgSource::new(&config.location)?))),
        WeatherSourceKind::OpenWeather => {
            if config.api_key.trim().is_empty() {
                warn!("weather: openweather selected but no API key configured; weather disabled");
                return Ok(None);
            }
            Ok(Some(Arc::new(OpenWeatherSource::new(
                &config.api_key,
                &config.city,
                &config.country_code,
                offset,
            )?)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn test_build_bmkg_by_default() {
        let source = build_source(&WeatherConfig::default(), wib()).unwrap();
        let source = source.expect("bmkg needs no key");
        assert_eq!(source.name(), "bmkg");
        assert_eq!(source.attribution(), "BMKG");
    }

    #[test]
    fn test_openweather_without_key_is_disabled() {
        let config = WeatherConfig {
            source: WeatherSourceKind::OpenWeather,
            ..Default::default()
        };
        assert!(build_source(&config, wib()).unwrap().is_none());
    }

    #[test]
    fn test_openweather_with_key() {
        let config = WeatherConfig {
            source: WeatherSourceKind::OpenWeather,
            api_key: "abc123".into(),
            ..Default::default()
        };
        let source = build_source(&config, wib()).unwrap().unwrap();
        assert_eq!(source.attribution(), "OpenWeatherMap");
    }
}
