//! Open-Meteo Client
//!
//! A client for the public Open-Meteo forecast API. No API key is needed.

use super::ForecastSource;
use super::error::WeatherError;
use super::location::Location;
use super::snapshot::WeatherSnapshot;
use crate::consts::cli_consts::weather::{CURRENT_FIELDS, HOURLY_FIELDS};
use crate::environment::Environment;
use log::{debug, warn};
use reqwest::{Client, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("pulse-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    environment: Environment,
}

impl OpenMeteoClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: Client::new(),
            environment,
        }
    }

    fn build_url(&self, location: &Location) -> String {
        forecast_url(&self.environment.forecast_url(), location)
    }

    async fn handle_response_status(response: Response) -> Result<Response, WeatherError> {
        if !response.status().is_success() {
            return Err(WeatherError::from_response(response).await);
        }
        Ok(response)
    }
}

/// Builds the forecast request URL for a location against `base_url`.
pub fn forecast_url(base_url: &str, location: &Location) -> String {
    format!(
        "{}/v1/forecast?latitude={}&longitude={}&current={}&hourly={}&timezone={}",
        base_url.trim_end_matches('/'),
        location.latitude,
        location.longitude,
        CURRENT_FIELDS,
        HOURLY_FIELDS,
        urlencoding::encode(location.timezone)
    )
}

#[async_trait::async_trait]
impl ForecastSource for OpenMeteoClient {
    async fn fetch_forecast(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        let url = self.build_url(location);
        debug!("Requesting forecast for {}: {}", location.name, url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await.inspect_err(|e| {
            warn!("Forecast request for {} failed: {}", location.name, e);
        })?;
        let body = response.bytes().await?;
        WeatherSnapshot::from_json(&body)
    }
}
