use thiserror::Error;

/// Top-level error type for Sapa.
#[derive(Debug, Error)]
pub enum SapaError {
    /// Error from the chat-completion provider.
    #[error("provider error: {0}")]
    Provider(String),

    /// Error from the messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Error from a weather source.
    #[error("weather error: {0}")]
    Weather(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = SapaError::from(io_err);
        let display = format!("{err}");
        assert!(
            display.contains("io error"),
            "expected 'io error' in display, got: {display}"
        );
        assert!(display.contains("file missing"));
    }

    #[test]
    fn test_provider_error_display() {
        let err = SapaError::Provider("quota exceeded".into());
        assert_eq!(format!("{err}"), "provider error: quota exceeded");
    }

    #[test]
    fn test_weather_error_display() {
        let err = SapaError::Weather("bmkg returned 503".into());
        assert_eq!(format!("{err}"), "weather error: bmkg returned 503");
    }
}
