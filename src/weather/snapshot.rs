//! Forecast snapshot and the conversion from the API's JSON shape.

use super::error::WeatherError;
use crate::consts::cli_consts::weather::{API_TIME_FORMAT, DISPLAY_TIME_FORMAT};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Raw forecast response. Only the fields the dashboard consumes are modelled.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    current: CurrentBlock,
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f64,
    weather_code: u16,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
}

/// One point of the hourly temperature series. `None` where the model has
/// no value for that hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyReading {
    pub time: NaiveDateTime,
    pub temperature: Option<f64>,
}

/// Current conditions plus the hourly temperature series from local
/// midnight, in the location's local time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub condition_code: u16,
    pub hourly: Vec<HourlyReading>,
}

impl WeatherSnapshot {
    pub fn from_json(body: &[u8]) -> Result<Self, WeatherError> {
        let response: ForecastResponse = serde_json::from_slice(body)?;
        Self::try_from(response)
    }

    pub fn condition(&self) -> &'static str {
        describe_condition(self.condition_code)
    }

    pub fn icon(&self) -> &'static str {
        condition_icon(self.condition_code)
    }

    /// Current temperature rounded to whole degrees for display.
    pub fn rounded_temperature(&self) -> f64 {
        round_half_up(self.temperature)
    }

    /// Observation time formatted for display, e.g. "Wednesday, May 1, 2024 02:00 PM".
    pub fn display_time(&self) -> String {
        self.time.format(DISPLAY_TIME_FORMAT).to_string()
    }

    /// The first `window` hourly readings, gaps included.
    pub fn first_hours(&self, window: usize) -> &[HourlyReading] {
        &self.hourly[..self.hourly.len().min(window)]
    }
}

impl TryFrom<ForecastResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        let time = parse_api_time(&response.current.time)?;

        let HourlyBlock {
            time: times,
            temperature_2m: temperatures,
        } = response.hourly;
        if times.len() != temperatures.len() {
            return Err(WeatherError::Malformed(format!(
                "hourly series has {} timestamps but {} temperatures",
                times.len(),
                temperatures.len()
            )));
        }

        let hourly = times
            .iter()
            .zip(temperatures)
            .map(|(time, temperature)| {
                Ok(HourlyReading {
                    time: parse_api_time(time)?,
                    temperature,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(WeatherSnapshot {
            time,
            temperature: response.current.temperature_2m,
            condition_code: response.current.weather_code,
            hourly,
        })
    }
}

/// Round to the nearest integer with halves going up (-2.5 -> -2), never
/// producing negative zero.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}

fn parse_api_time(value: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(value, API_TIME_FORMAT)
        .map_err(|e| WeatherError::Malformed(format!("invalid timestamp '{}': {}", value, e)))
}

/// Text for a WMO weather code. Codes outside the known set get a generic description.
pub fn describe_condition(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1..=3 => "Partly cloudy",
        45 | 48 => "Fog",
        61 => "Light rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Light snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        80 => "Light showers",
        81 => "Moderate showers",
        82 => "Heavy showers",
        _ => "Unknown weather condition",
    }
}

pub fn condition_icon(code: u16) -> &'static str {
    match code {
        0 => "☀️",
        1..=3 => "⛅",
        45..=48 => "🌫️",
        61..=65 => "🌧️",
        71..=75 => "❄️",
        80..=82 => "🌦️",
        _ => "🌈",
    }
}
