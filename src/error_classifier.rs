use crate::logging::LogLevel;
use crate::weather::WeatherError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_weather_error(&self, error: &WeatherError) -> LogLevel {
        match error {
            // Non-critical: rate limiting and temporary server issues
            WeatherError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            WeatherError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: bad request or the body doesn't match the forecast shape
            WeatherError::Http { .. } => LogLevel::Error,
            WeatherError::Decode(_) => LogLevel::Error,
            WeatherError::Malformed(_) => LogLevel::Error,

            // Network issues - usually temporary
            WeatherError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> WeatherError {
        WeatherError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_server_errors_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_weather_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_weather_error(&http(429)), LogLevel::Debug);
    }

    #[test]
    fn test_client_and_shape_errors_are_critical() {
        let classifier = ErrorClassifier::default();
        assert_eq!(classifier.classify_weather_error(&http(400)), LogLevel::Error);
        assert_eq!(
            classifier.classify_weather_error(&WeatherError::Malformed("no hourly".into())),
            LogLevel::Error
        );
        let decode = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(
            classifier.classify_weather_error(&WeatherError::Decode(decode)),
            LogLevel::Error
        );
    }
}
