//! Headless mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::consts::cli_consts::weather::HOURLY_WINDOW;
use crate::weather::{ForecastSource, Location, WeatherSnapshot};
use std::error::Error;

/// Fetches one forecast and prints it to stdout.
///
/// # Arguments
/// * `source` - Where to fetch the forecast from
/// * `location` - Location to fetch
/// * `json` - Print the raw snapshot as JSON instead of a summary
///
/// # Returns
/// * `Ok(())` - The forecast was fetched and printed
/// * `Err` - The fetch failed; the error carries the user-facing message
pub async fn run_headless_mode(
    source: &dyn ForecastSource,
    location: Location,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if !json {
        print_session_starting("headless", location.name);
    }

    let snapshot = source
        .fetch_forecast(&location)
        .await
        .map_err(|e| format!("{} ({})", e.user_message(), e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    for line in format_summary(&location, &snapshot) {
        println!("{}", line);
    }
    print_session_exit_success();
    Ok(())
}

/// Plain-text rendering of a snapshot: a headline and one line per hour from
/// local midnight.
pub fn format_summary(location: &Location, snapshot: &WeatherSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("{} - {}", location.name, snapshot.display_time()),
        format!(
            "{}°C {} {}",
            snapshot.rounded_temperature(),
            snapshot.icon(),
            snapshot.condition()
        ),
    ];
    lines.extend(snapshot.first_hours(HOURLY_WINDOW).iter().map(|reading| {
        let time = reading.time.format("%H:%M");
        match reading.temperature {
            Some(temperature) => format!("  {}  {:>5.1}°C", time, temperature),
            None => format!("  {}     --", time),
        }
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::snapshot::HourlyReading;
    use crate::weather::{LOCATIONS, MockForecastSource, WeatherError};
    use chrono::NaiveDate;

    fn sample() -> WeatherSnapshot {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        WeatherSnapshot {
            time: day.and_hms_opt(14, 0, 0).unwrap(),
            temperature: 17.6,
            condition_code: 61,
            hourly: (0..30)
                .map(|h| HourlyReading {
                    time: day.and_hms_opt(0, 0, 0).unwrap() + chrono::Duration::hours(h),
                    temperature: (h != 3).then(|| 10.0 + h as f64 / 2.0),
                })
                .collect(),
        }
    }

    #[test]
    fn test_summary_headline_and_window() {
        let lines = format_summary(&LOCATIONS[1], &sample());
        assert_eq!(lines[0], "London - Wednesday, May 1, 2024 02:00 PM");
        assert_eq!(lines[1], "18°C 🌧️ Light rain");
        // Headline, conditions, then 24 hourly rows.
        assert_eq!(lines.len(), 2 + HOURLY_WINDOW);
        assert_eq!(lines[2], "  00:00   10.0°C");
        assert_eq!(lines[5], "  03:00     --");
    }

    #[test]
    fn test_summary_rounds_halves_up() {
        let snapshot = WeatherSnapshot {
            temperature: -2.5,
            ..sample()
        };
        assert!(format_summary(&LOCATIONS[1], &snapshot)[1].starts_with("-2°C"));
        let snapshot = WeatherSnapshot {
            temperature: -0.4,
            ..sample()
        };
        assert!(format_summary(&LOCATIONS[1], &snapshot)[1].starts_with("0°C"));
    }

    #[tokio::test]
    async fn test_failure_is_reported_as_error() {
        let mut source = MockForecastSource::new();
        source.expect_fetch_forecast().returning(|_| {
            Err(WeatherError::Http {
                status: 500,
                message: "oops".to_string(),
            })
        });
        let result = run_headless_mode(&source, LOCATIONS[0], true).await;
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Weather data unavailable"));
    }
}
