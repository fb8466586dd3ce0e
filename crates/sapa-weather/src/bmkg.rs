//! BMKG public forecast API (Indonesian Meteorology, Climatology and
//! Geophysical Agency). No API key required.
//!
//! The API returns three-hourly forecast slots; the first slot is used as
//! "current" conditions.

use async_trait::async_trait;
use sapa_core::{
    error::SapaError,
    language::Language,
    traits::WeatherSource,
    weather::WeatherSnapshot,
};
use serde::Deserialize;
use tracing::debug;

use crate::condition::condition_from_bmkg_code;

const BMKG_FORECAST_URL: &str = "https://api.bmkg.go.id/publik/prakiraan-cuaca";

/// BMKG forecast source for one level-4 administrative region.
pub struct BmkgSource {
    client: reqwest::Client,
    base_url: String,
    adm4: String,
}

impl BmkgSource {
    /// `adm4` is the BMKG region code, e.g. `31.71.03.1001`.
    pub fn new(adm4: &str) -> Result<Self, SapaError> {
        Ok(Self {
            client: crate::http_client()?,
            base_url: BMKG_FORECAST_URL.to_string(),
            adm4: adm4.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BmkgResponse {
    #[serde(default)]
    pub lokasi: Option<BmkgLocation>,
    #[serde(default)]
    pub data: Vec<BmkgData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BmkgLocation {
    #[serde(default)]
    pub kotkab: Option<String>,
    #[serde(default)]
    pub desa: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BmkgData {
    #[serde(default)]
    pub lokasi: Option<BmkgLocation>,
    #[serde(default)]
    pub cuaca: Vec<Vec<BmkgSlot>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BmkgSlot {
    /// Temperature, °C.
    pub t: f64,
    /// Relative humidity, %.
    pub hu: f64,
    /// Wind speed, km/h.
    pub ws: f64,
    /// Visibility, metres.
    #[serde(default)]
    pub vs: Option<f64>,
    pub weather: i64,
    #[serde(default)]
    pub weather_desc: String,
    #[serde(default)]
    pub weather_desc_en: String,
    #[serde(default)]
    pub local_datetime: String,
}

impl BmkgResponse {
    /// Convert the first forecast slot into a snapshot.
    pub(crate) fn into_snapshot(self, language: Language) -> Result<WeatherSnapshot, SapaError> {
        let mut data = self.data.into_iter();
        let first = data
            .next()
            .ok_or_else(|| SapaError::Weather("bmkg: response has no data".into()))?;

        let location = self
            .lokasi
            .or(first.lokasi)
            .and_then(|l| l.kotkab.or(l.desa))
            .unwrap_or_default();

        let slot = first
            .cuaca
            .into_iter()
            .next()
            .and_then(|day| day.into_iter().next())
            .ok_or_else(|| SapaError::Weather("bmkg: response has no forecast slot".into()))?;

        let description = match language {
            Language::Indonesian => slot.weather_desc.clone(),
            Language::English => slot.weather_desc_en.clone(),
        };

        Ok(WeatherSnapshot {
            location,
            description,
            description_en: slot.weather_desc_en,
            condition: condition_from_bmkg_code(slot.weather),
            temperature_c: slot.t,
            feels_like_c: None,
            humidity: slot.hu,
            wind_speed_ms: slot.ws / 3.6,
            visibility_m: slot.vs,
            observed_at: slot.local_datetime,
        })
    }
}

#[async_trait]
impl WeatherSource for BmkgSource {
    fn name(&self) -> &str {
        "bmkg"
    }

    fn attribution(&self) -> &str {
        "BMKG"
    }

    async fn current(&self, language: Language) -> Result<WeatherSnapshot, SapaError> {
        debug!("bmkg: GET {} adm4={}", self.base_url, self.adm4);

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("adm4", self.adm4.as_str())])
            .send()
            .await
            .map_err(|e| SapaError::Weather(format!("bmkg request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(SapaError::Weather(format!("bmkg returned {status}")));
        }

        let parsed: BmkgResponse = resp
            .json()
            .await
            .map_err(|e| SapaError::Weather(format!("bmkg: failed to parse response: {e}")))?;

        parsed.into_snapshot(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapa_core::weather::WeatherCondition;

    const SAMPLE: &str = r#"{
        "lokasi": {
            "adm4": "31.71.03.1001",
            "desa": "Kemayoran",
            "kotkab": "Kota Adm. Jakarta Pusat",
            "provinsi": "DKI Jakarta"
        },
        "data": [{
            "lokasi": {"adm4": "31.71.03.1001", "kotkab": "Kota Adm. Jakarta Pusat"},
            "cuaca": [[
                {
                    "datetime": "2025-06-07T00:00:00Z",
                    "t": 27.4,
                    "tcc": 40,
                    "tp": 0,
                    "weather": 1,
                    "weather_desc": "Cerah Berawan",
                    "weather_desc_en": "Mostly Clear",
                    "wd": "E",
                    "ws": 18,
                    "hu": 78,
                    "vs": 9500,
                    "vs_text": "< 10 km",
                    "local_datetime": "2025-06-07 07:00:00"
                },
                {
                    "t": 31, "weather": 61, "weather_desc": "Hujan Sedang",
                    "weather_desc_en": "Moderate Rain", "ws": 5, "hu": 80,
                    "local_datetime": "2025-06-07 10:00:00"
                }
            ]]
        }]
    }"#;

    #[test]
    fn test_parse_first_slot_english() {
        let resp: BmkgResponse = serde_json::from_str(SAMPLE).unwrap();
        let snap = resp.into_snapshot(Language::English).unwrap();
        assert_eq!(snap.location, "Kota Adm. Jakarta Pusat");
        assert_eq!(snap.description, "Mostly Clear");
        assert_eq!(snap.condition, WeatherCondition::Clouds);
        assert!((snap.temperature_c - 27.4).abs() < 1e-9);
        assert!((snap.humidity - 78.0).abs() < 1e-9);
        assert!((snap.wind_speed_ms - 5.0).abs() < 1e-9, "18 km/h is 5 m/s");
        assert_eq!(snap.visibility_m, Some(9500.0));
        assert_eq!(snap.observed_at, "2025-06-07 07:00:00");
    }

    #[test]
    fn test_parse_indonesian_description() {
        let resp: BmkgResponse = serde_json::from_str(SAMPLE).unwrap();
        let snap = resp.into_snapshot(Language::Indonesian).unwrap();
        assert_eq!(snap.description, "Cerah Berawan");
        assert_eq!(snap.description_en, "Mostly Clear");
    }

    #[test]
    fn test_empty_data_is_error() {
        let resp: BmkgResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        let err = resp.into_snapshot(Language::English).unwrap_err();
        assert!(matches!(err, SapaError::Weather(_)));
    }

    #[test]
    fn test_empty_forecast_is_error() {
        let resp: BmkgResponse = serde_json::from_str(r#"{"data": [{"cuaca": [[]]}]}"#).unwrap();
        assert!(resp.into_snapshot(Language::English).is_err());
    }
}
