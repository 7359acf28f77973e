//! Weather fetch lifecycle.
//!
//! Every selection is stamped with a monotonically increasing token. The fetch
//! runs as a tokio task and reports back over a channel; the UI loop drains the
//! channel and applies outcomes with [`WeatherController::complete`]. Outcomes
//! carrying anything but the latest token are dropped, so the most recent
//! selection is what ends up on screen regardless of response order.

use super::error::WeatherError;
use super::location::Location;
use super::snapshot::WeatherSnapshot;
use super::ForecastSource;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Where the Weather panel is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPhase {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight for the selected location.
    Loading,
    /// The latest request succeeded.
    Ready(WeatherSnapshot),
    /// The latest request failed; holds the message shown inline.
    Failed(String),
}

/// The result of one fetch, tagged with the token it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub token: u64,
    pub location: Location,
    pub result: Result<WeatherSnapshot, WeatherError>,
}

/// What applying an outcome did to the controller.
#[derive(Debug)]
pub enum Completion {
    Loaded(Location),
    Failed {
        location: Location,
        error: WeatherError,
    },
    /// A newer selection superseded this request.
    Stale(Location),
}

pub struct WeatherController {
    source: Arc<dyn ForecastSource>,
    selected: Location,
    phase: WeatherPhase,
    latest_token: u64,
    outcome_sender: mpsc::UnboundedSender<FetchOutcome>,
    outcome_receiver: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl std::fmt::Debug for WeatherController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherController")
            .field("selected", &self.selected)
            .field("phase", &self.phase)
            .field("latest_token", &self.latest_token)
            .finish()
    }
}

impl WeatherController {
    pub fn new(source: Arc<dyn ForecastSource>, initial: Location) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::unbounded_channel();
        Self {
            source,
            selected: initial,
            phase: WeatherPhase::Idle,
            latest_token: 0,
            outcome_sender,
            outcome_receiver,
        }
    }

    pub fn selected(&self) -> Location {
        self.selected
    }

    pub fn phase(&self) -> &WeatherPhase {
        &self.phase
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.phase {
            WeatherPhase::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            WeatherPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Select a location and spawn its fetch. Must be called inside a tokio runtime.
    pub fn select_location(&mut self, location: Location) -> u64 {
        let token = self.begin(location);
        let source = Arc::clone(&self.source);
        let sender = self.outcome_sender.clone();
        tokio::spawn(async move {
            let result = source.fetch_forecast(&location).await;
            // The receiver only goes away with the dashboard.
            let _ = sender.send(FetchOutcome {
                token,
                location,
                result,
            });
        });
        token
    }

    /// Enter Loading for `location` and issue a fresh token. Drops any
    /// snapshot or error from the previous request.
    pub fn begin(&mut self, location: Location) -> u64 {
        self.latest_token += 1;
        self.selected = location;
        self.phase = WeatherPhase::Loading;
        self.latest_token
    }

    /// Apply a finished fetch.
    pub fn complete(&mut self, outcome: FetchOutcome) -> Completion {
        if outcome.token != self.latest_token {
            return Completion::Stale(outcome.location);
        }
        match outcome.result {
            Ok(snapshot) => {
                self.phase = WeatherPhase::Ready(snapshot);
                Completion::Loaded(outcome.location)
            }
            Err(error) => {
                self.phase = WeatherPhase::Failed(error.user_message());
                Completion::Failed {
                    location: outcome.location,
                    error,
                }
            }
        }
    }

    /// Next finished fetch, if one is waiting.
    pub fn try_next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_receiver.try_recv().ok()
    }

    /// Wait for the next finished fetch.
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{LOCATIONS, MockForecastSource};
    use chrono::NaiveDate;

    fn snapshot(temperature: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            time: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            temperature,
            condition_code: 0,
            hourly: Vec::new(),
        }
    }

    fn idle_controller() -> WeatherController {
        WeatherController::new(Arc::new(MockForecastSource::new()), LOCATIONS[0])
    }

    #[test]
    fn test_every_location_reaches_exactly_one_terminal_phase() {
        for (i, location) in LOCATIONS.iter().enumerate() {
            let mut ok = idle_controller();
            let token = ok.begin(*location);
            assert_eq!(ok.phase(), &WeatherPhase::Loading);
            ok.complete(FetchOutcome {
                token,
                location: *location,
                result: Ok(snapshot(i as f64)),
            });
            assert!(matches!(ok.phase(), WeatherPhase::Ready(_)));

            let mut failed = idle_controller();
            let token = failed.begin(*location);
            failed.complete(FetchOutcome {
                token,
                location: *location,
                result: Err(WeatherError::Malformed("x".to_string())),
            });
            assert!(matches!(failed.phase(), WeatherPhase::Failed(_)));
        }
    }

    #[test]
    fn test_failure_after_success_leaves_no_snapshot() {
        let mut controller = idle_controller();
        let token = controller.begin(LOCATIONS[1]);
        controller.complete(FetchOutcome {
            token,
            location: LOCATIONS[1],
            result: Ok(snapshot(12.0)),
        });
        assert!(controller.snapshot().is_some());

        let token = controller.begin(LOCATIONS[1]);
        assert!(controller.snapshot().is_none());
        let completion = controller.complete(FetchOutcome {
            token,
            location: LOCATIONS[1],
            result: Err(WeatherError::Http {
                status: 500,
                message: "boom".to_string(),
            }),
        });
        assert!(matches!(completion, Completion::Failed { .. }));
        assert!(controller.snapshot().is_none());
        assert_eq!(controller.error(), Some("Weather data unavailable"));
    }

    #[test]
    fn test_reselecting_issues_new_token() {
        let mut controller = idle_controller();
        let first = controller.begin(LOCATIONS[0]);
        let second = controller.begin(LOCATIONS[0]);
        assert!(second > first);
    }

    #[test]
    fn test_latest_selection_wins_regardless_of_arrival_order() {
        let london = LOCATIONS[1];
        let tokyo = LOCATIONS[3];
        let mut controller = idle_controller();
        let london_token = controller.begin(london);
        let tokyo_token = controller.begin(tokyo);

        // Tokyo resolves first, London last.
        let applied = controller.complete(FetchOutcome {
            token: tokyo_token,
            location: tokyo,
            result: Ok(snapshot(21.0)),
        });
        assert!(matches!(applied, Completion::Loaded(loc) if loc == tokyo));
        let late = controller.complete(FetchOutcome {
            token: london_token,
            location: london,
            result: Ok(snapshot(9.0)),
        });
        assert!(matches!(late, Completion::Stale(loc) if loc == london));
        assert_eq!(controller.selected(), tokyo);
        assert_eq!(controller.snapshot().unwrap().temperature, 21.0);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_loading() {
        let mut controller = idle_controller();
        let old = controller.begin(LOCATIONS[1]);
        controller.begin(LOCATIONS[2]);
        controller.complete(FetchOutcome {
            token: old,
            location: LOCATIONS[1],
            result: Err(WeatherError::Malformed("late".to_string())),
        });
        assert_eq!(controller.phase(), &WeatherPhase::Loading);
    }

    #[tokio::test]
    async fn test_select_location_fetches_through_source() {
        let mut source = MockForecastSource::new();
        source
            .expect_fetch_forecast()
            .withf(|location: &Location| location.name == "Tokyo")
            .times(1)
            .returning(|_| Ok(snapshot(23.5)));

        let mut controller = WeatherController::new(Arc::new(source), LOCATIONS[0]);
        controller.select_location(LOCATIONS[3]);
        assert_eq!(controller.phase(), &WeatherPhase::Loading);

        let outcome = controller.next_outcome().await.unwrap();
        assert!(matches!(
            controller.complete(outcome),
            Completion::Loaded(loc) if loc == LOCATIONS[3]
        ));
        assert_eq!(controller.snapshot().unwrap().temperature, 23.5);
    }

    #[tokio::test]
    async fn test_select_location_surfaces_failure() {
        let mut source = MockForecastSource::new();
        source.expect_fetch_forecast().returning(|_| {
            Err(WeatherError::Http {
                status: 502,
                message: "bad gateway".to_string(),
            })
        });

        let mut controller = WeatherController::new(Arc::new(source), LOCATIONS[0]);
        controller.select_location(LOCATIONS[0]);
        let outcome = controller.next_outcome().await.unwrap();
        controller.complete(outcome);
        assert_eq!(controller.error(), Some("Weather data unavailable"));
        assert!(controller.snapshot().is_none());
    }
}
