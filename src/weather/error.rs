//! Error handling for the forecast client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The forecast service answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The JSON parsed but its contents could not be interpreted.
    #[error("Malformed forecast: {0}")]
    Malformed(String),
}

impl WeatherError {
    pub async fn from_response(response: reqwest::Response) -> WeatherError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        WeatherError::Http { status, message }
    }

    /// Short message shown inline in the Weather panel.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Http { .. } => "Weather data unavailable".to_string(),
            WeatherError::Reqwest(_) => "Failed to fetch weather data".to_string(),
            WeatherError::Decode(_) | WeatherError::Malformed(_) => {
                "Weather data could not be read".to_string()
            }
        }
    }
}
