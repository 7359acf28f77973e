pub(crate) mod client;
pub use client::OpenMeteoClient;
pub mod controller;
pub mod error;
pub mod location;
pub mod snapshot;

pub use controller::{Completion, FetchOutcome, WeatherController, WeatherPhase};
pub use error::WeatherError;
pub use location::{DEFAULT_LOCATION, LOCATIONS, Location, UnknownLocation};
pub use snapshot::WeatherSnapshot;

#[cfg(test)]
use mockall::automock;

/// Anything that can produce a forecast snapshot for a location.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch current conditions and the hourly temperature series.
    async fn fetch_forecast(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError>;
}
