mod channels;
mod defaults;
mod providers;
mod reminder;
mod weather;

#[cfg(test)]
mod tests;

pub use channels::*;
pub use providers::*;
pub use reminder::*;
pub use weather::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::SapaError;
use crate::language::Language;
use defaults::*;

/// Top-level Sapa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Reply language when detection finds no evidence.
    #[serde(default = "default_language")]
    pub default_language: Language,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_language: default_language(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Overlay environment variables on top of file/default values.
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), SapaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("TELEGRAM_BOT_TOKEN") {
            self.telegram.bot_token = v;
        }
        if let Some(v) = get("OPENAI_API_KEY") {
            self.openai.api_key = v;
        }
        if let Some(v) = get("OPENAI_MODEL") {
            self.openai.model = v;
        }
        if let Some(v) = get("OPENAI_BASE_URL") {
            self.openai.base_url = v;
        }
        if let Some(v) = get("MAX_TOKENS") {
            self.openai.max_tokens = parse_env("MAX_TOKENS", &v)?;
        }
        if let Some(v) = get("TEMPERATURE") {
            self.openai.temperature = parse_env("TEMPERATURE", &v)?;
        }
        if let Some(v) = get("DEFAULT_LANGUAGE") {
            self.bot.default_language = parse_env("DEFAULT_LANGUAGE", &v)?;
        }
        if let Some(v) = get("WEATHER_SOURCE") {
            self.weather.source = parse_env("WEATHER_SOURCE", &v)?;
        }
        if let Some(v) = get("WEATHER_LOCATION") {
            self.weather.location = v;
        }
        if let Some(v) = get("OPENWEATHER_API_KEY") {
            self.weather.api_key = v;
        }
        if let Some(v) = get("CITY_NAME") {
            self.weather.city = v;
        }
        if let Some(v) = get("COUNTRY_CODE") {
            self.weather.country_code = v;
        }
        if let Some(v) = get("REMINDER_USER_ID") {
            self.reminder.target_user = Some(parse_env("REMINDER_USER_ID", &v)?);
        }
        if let Some(v) = get("REMINDER_TIME") {
            self.reminder.time = v;
        }
        if let Some(v) = get("REMINDER_TIMEZONE") {
            self.reminder.timezone = v;
        }

        Ok(())
    }

    /// Check required credentials and value ranges.
    pub fn validate(&self) -> Result<(), SapaError> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(SapaError::Config(
                "telegram bot token is missing. Set TELEGRAM_BOT_TOKEN or telegram.bot_token."
                    .into(),
            ));
        }
        if self.openai.api_key.trim().is_empty() {
            return Err(SapaError::Config(
                "OpenAI API key is missing. Set OPENAI_API_KEY or openai.api_key.".into(),
            ));
        }
        if self.openai.max_tokens == 0 {
            return Err(SapaError::Config("max_tokens must be greater than 0".into()));
        }
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(SapaError::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.openai.temperature
            )));
        }
        self.reminder.hour_minute()?;
        self.reminder.offset()?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, SapaError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| SapaError::Config(format!("invalid value for {key} ('{value}'): {e}")))
}

/// Show only the first 10 characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let prefix: String = secret.chars().take(10).collect();
    format!("{prefix}...")
}

/// Parse a TOML config file. Falls back to defaults if the file does not exist.
pub fn load_file(path: &str) -> Result<Config, SapaError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "config: file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SapaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| SapaError::Config(format!("failed to parse config: {}", e)))
}

/// Load configuration: defaults, then the TOML file, then process environment.
/// The result is validated.
pub fn load(path: &str) -> Result<Config, SapaError> {
    let mut config = load_file(path)?;
    config.apply_env(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}
