use super::*;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn valid_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("TELEGRAM_BOT_TOKEN", "123456:ABCDEF"),
        ("OPENAI_API_KEY", "sk-test-key-0123456789"),
    ]
}

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.bot.name, "SAPA");
    assert_eq!(cfg.bot.default_language, Language::English);
    assert_eq!(cfg.openai.model, "chatgpt-4o-latest");
    assert_eq!(cfg.openai.max_tokens, 1000);
    assert!((cfg.openai.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(cfg.weather.source, WeatherSourceKind::Bmkg);
    assert_eq!(cfg.weather.location, "31.71.03.1001");
    assert_eq!(cfg.reminder.time, "08:00");
    assert_eq!(cfg.reminder.timezone, "Asia/Jakarta");
    assert!(cfg.reminder.target_user.is_none());
    assert_eq!(cfg.telegram.poll_timeout_secs, 30);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let toml_str = r#"
        [openai]
        model = "gpt-4o-mini"

        [weather]
        source = "openweather"
        city = "Bandung"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.openai.model, "gpt-4o-mini");
    assert_eq!(cfg.openai.max_tokens, 1000);
    assert_eq!(cfg.weather.source, WeatherSourceKind::OpenWeather);
    assert_eq!(cfg.weather.city, "Bandung");
    assert_eq!(cfg.weather.country_code, "ID");
    assert_eq!(cfg.weather.location_label(), "Bandung, ID");
}

#[test]
fn test_env_overrides_file_values() {
    let mut cfg: Config = toml::from_str(
        r#"
        [openai]
        model = "from-file"
    "#,
    )
    .unwrap();
    let mut vars = valid_env();
    vars.extend([
        ("OPENAI_MODEL", "from-env"),
        ("TEMPERATURE", "1.2"),
        ("DEFAULT_LANGUAGE", "id"),
        ("REMINDER_USER_ID", "987654321"),
        ("WEATHER_SOURCE", "openweathermap"),
    ]);
    cfg.apply_env(env(&vars)).unwrap();

    assert_eq!(cfg.openai.model, "from-env");
    assert!((cfg.openai.temperature - 1.2).abs() < 1e-6);
    assert_eq!(cfg.bot.default_language, Language::Indonesian);
    assert_eq!(cfg.reminder.target_user, Some(987654321));
    assert_eq!(cfg.weather.source, WeatherSourceKind::OpenWeather);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_empty_env_value_is_ignored() {
    let mut cfg = Config::default();
    cfg.apply_env(env(&[("OPENAI_MODEL", "  ")])).unwrap();
    assert_eq!(cfg.openai.model, "chatgpt-4o-latest");
}

#[test]
fn test_invalid_env_number_is_config_error() {
    let mut cfg = Config::default();
    let err = cfg
        .apply_env(env(&[("MAX_TOKENS", "lots")]))
        .unwrap_err();
    assert!(matches!(err, SapaError::Config(_)));
    assert!(err.to_string().contains("MAX_TOKENS"));
}

#[test]
fn test_validate_requires_credentials() {
    let mut cfg = Config::default();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));

    cfg.apply_env(env(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn test_validate_temperature_range() {
    let mut cfg = Config::default();
    cfg.apply_env(env(&valid_env())).unwrap();
    cfg.openai.temperature = 2.5;
    assert!(cfg.validate().is_err());
    cfg.openai.temperature = 0.0;
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_reminder_settings() {
    let mut cfg = Config::default();
    cfg.apply_env(env(&valid_env())).unwrap();
    cfg.reminder.time = "25:00".into();
    assert!(cfg.validate().is_err());

    cfg.reminder.time = "07:30".into();
    cfg.reminder.timezone = "Mars/Olympus".into();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_parse_timezone_names_and_offsets() {
    assert_eq!(parse_timezone("Asia/Jakarta").unwrap().local_minus_utc(), 7 * 3600);
    assert_eq!(parse_timezone("Asia/Makassar").unwrap().local_minus_utc(), 8 * 3600);
    assert_eq!(parse_timezone("Asia/Jayapura").unwrap().local_minus_utc(), 9 * 3600);
    assert_eq!(parse_timezone("UTC").unwrap().local_minus_utc(), 0);
    assert_eq!(parse_timezone("+05:30").unwrap().local_minus_utc(), 19800);
    assert_eq!(parse_timezone("-03:00").unwrap().local_minus_utc(), -10800);
    assert!(parse_timezone("+15:00").is_err());
    assert!(parse_timezone("Jakarta").is_err());
}

#[test]
fn test_parse_hour_minute() {
    assert_eq!(parse_hour_minute("08:00").unwrap(), (8, 0));
    assert_eq!(parse_hour_minute(" 23:59 ").unwrap(), (23, 59));
    assert!(parse_hour_minute("8").is_err());
    assert!(parse_hour_minute("12:60").is_err());
}

#[test]
fn test_mask_secret() {
    assert_eq!(mask_secret("sk-abcdefghijklmnop"), "sk-abcdefg...");
    assert_eq!(mask_secret("short"), "short...");
    assert_eq!(mask_secret(""), "(not set)");
}

#[test]
fn test_load_file_missing_returns_defaults() {
    let cfg = load_file("/nonexistent/__sapa_test__/config.toml").unwrap();
    assert_eq!(cfg.bot.name, "SAPA");
}

#[test]
fn test_load_file_invalid_toml_is_error() {
    let tmp = std::env::temp_dir().join("__sapa_test_bad_config__.toml");
    std::fs::write(&tmp, "[openai\nmodel = ").unwrap();
    let err = load_file(tmp.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
    let _ = std::fs::remove_file(&tmp);
}
