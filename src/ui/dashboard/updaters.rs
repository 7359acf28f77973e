//! Dashboard state update logic
//!
//! Applies finished forecast fetches and moves queued events into the activity log

use super::state::DashboardState;

use crate::events::{Event as DashboardEvent, EventType};
use crate::logging::LogLevel;
use crate::weather::Completion;

impl DashboardState {
    /// Update the dashboard state with a new tick and any finished fetches.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(outcome) = self.weather.try_next_outcome() {
            let completion = self.weather.complete(outcome);
            self.record_completion(completion);
        }

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Turn an applied fetch into an activity event.
    fn record_completion(&mut self, completion: Completion) {
        let event = match completion {
            Completion::Loaded(location) => DashboardEvent::weather_with_level(
                format!("Forecast loaded for {}", location.name),
                EventType::Success,
                LogLevel::Info,
            ),
            Completion::Failed { location, error } => {
                let level = self.error_classifier().classify_weather_error(&error);
                log::warn!("forecast for {} failed: {}", location.name, error);
                DashboardEvent::weather_with_level(
                    format!("Forecast for {} failed: {}", location.name, error),
                    EventType::Error,
                    level,
                )
            }
            Completion::Stale(location) => DashboardEvent::weather_with_level(
                format!("Discarded stale forecast for {}", location.name),
                EventType::Refresh,
                LogLevel::Debug,
            ),
        };
        self.add_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Tab;
    use crate::ui::UIConfig;
    use crate::weather::{
        FetchOutcome, LOCATIONS, Location, MockForecastSource, WeatherError, WeatherPhase,
        WeatherSnapshot,
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            time: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            temperature: 19.0,
            condition_code: 2,
            hourly: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_update_applies_finished_fetch() {
        let mut source = MockForecastSource::new();
        source
            .expect_fetch_forecast()
            .returning(|_| Ok(snapshot()));
        let mut state = DashboardState::new(
            Arc::new(source),
            &UIConfig::default(),
            1280,
        );
        state.select_tab(Tab::Weather);

        // Give the spawned fetch a chance to report back
        for _ in 0..50 {
            state.update();
            if state.weather.snapshot().is_some() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert!(matches!(state.weather.phase(), WeatherPhase::Ready(_)));
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.msg == "Forecast loaded for Dhaka")
        );
    }

    #[test]
    fn test_stale_completion_is_logged_at_debug() {
        let mut state = DashboardState::new(
            Arc::new(MockForecastSource::new()),
            &UIConfig::default(),
            1280,
        );
        let london: Location = LOCATIONS[1];
        let old = state.weather.begin(london);
        state.weather.begin(LOCATIONS[2]);
        let completion = state.weather.complete(FetchOutcome {
            token: old,
            location: london,
            result: Ok(snapshot()),
        });
        state.record_completion(completion);
        state.update();

        let event = state.activity_logs.back().unwrap();
        assert_eq!(event.msg, "Discarded stale forecast for London");
        assert_eq!(event.log_level, LogLevel::Debug);
        assert_eq!(state.weather.phase(), &WeatherPhase::Loading);
    }

    #[test]
    fn test_failure_level_comes_from_classifier() {
        let mut state = DashboardState::new(
            Arc::new(MockForecastSource::new()),
            &UIConfig::default(),
            1280,
        );
        let token = state.weather.begin(LOCATIONS[0]);
        let completion = state.weather.complete(FetchOutcome {
            token,
            location: LOCATIONS[0],
            result: Err(WeatherError::Http {
                status: 503,
                message: "unavailable".to_string(),
            }),
        });
        state.record_completion(completion);
        state.update();

        let event = state.activity_logs.back().unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert_eq!(state.weather.error(), Some("Weather data unavailable"));
    }
}
