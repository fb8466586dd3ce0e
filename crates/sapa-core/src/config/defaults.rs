//! Default value functions used by serde for config deserialization.

use crate::language::Language;

pub fn default_name() -> String {
    "SAPA".to_string()
}

pub fn default_language() -> Language {
    Language::English
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_poll_timeout() -> u64 {
    30
}

pub fn default_retry_delay() -> u64 {
    5
}

pub fn default_openai_model() -> String {
    "chatgpt-4o-latest".to_string()
}

pub fn default_max_tokens() -> u32 {
    1000
}

pub fn default_temperature() -> f32 {
    0.7
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// BMKG level-4 administrative code (Kemayoran, Jakarta Pusat).
pub fn default_weather_location() -> String {
    "31.71.03.1001".to_string()
}

pub fn default_city() -> String {
    "Jakarta".to_string()
}

pub fn default_country_code() -> String {
    "ID".to_string()
}

pub fn default_reminder_time() -> String {
    "08:00".to_string()
}

pub fn default_timezone() -> String {
    "Asia/Jakarta".to_string()
}
