//! Dashboard state management
//!
//! Contains the main dashboard state struct and the operations behind each key

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::viewport::columns_to_px;
use crate::dataset::{SALES, USERS};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event as DashboardEvent, EventType};
use crate::logging::LogLevel;
use crate::navigation::{NavigationState, Tab};
use crate::pipeline::{PipelineEditor, PipelineField};
use crate::ui::app::UIConfig;
use crate::weather::{ForecastSource, Location, WeatherController, WeatherPhase};

use std::collections::VecDeque;
use std::sync::Arc;

/// Which pipeline field has focus and the raw text typed into it.
#[derive(Debug, Clone)]
pub struct PipelineForm {
    pub focus: PipelineField,
    pub input: String,
}

impl Default for PipelineForm {
    fn default() -> Self {
        Self {
            focus: PipelineField::Leads,
            input: String::new(),
        }
    }
}

/// Everything the dashboard needs between frames. Dropped on logout.
#[derive(Debug)]
pub struct DashboardState {
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Active panel and drawer.
    pub navigation: NavigationState,
    /// Forecast lifecycle behind the Weather panel.
    pub weather: WeatherController,
    /// Committed pipeline counters and the open draft, if any.
    pub pipeline: PipelineEditor,
    /// Focus and text of the pipeline form.
    pub pipeline_form: PipelineForm,
    /// First visible row of the user directory.
    pub users_offset: usize,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<DashboardEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<DashboardEvent>,
    /// Animation tick counter
    pub tick: usize,

    error_classifier: ErrorClassifier,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        source: Arc<dyn ForecastSource>,
        ui_config: &UIConfig,
        viewport_width_px: u32,
    ) -> Self {
        Self {
            with_background_color: ui_config.with_background_color,
            navigation: NavigationState::new(viewport_width_px),
            weather: WeatherController::new(source, ui_config.initial_location),
            pipeline: PipelineEditor::new(SALES.pipeline),
            pipeline_form: PipelineForm::default(),
            users_offset: 0,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            error_classifier: ErrorClassifier::new(),
        }
    }

    pub fn error_classifier(&self) -> &ErrorClassifier {
        &self.error_classifier
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: DashboardEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: DashboardEvent) {
        self.pending_events.push_back(event);
    }

    /// Show `tab`. The first visit to Weather starts the initial fetch.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.navigation.active_tab() != tab {
            self.add_event(DashboardEvent::navigation(format!("Opened {} panel", tab.id())));
        }
        self.navigation.select_tab(tab);
        if tab == Tab::Weather && *self.weather.phase() == WeatherPhase::Idle {
            self.select_location(self.weather.selected());
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.navigation.toggle_drawer();
        let msg = if self.navigation.sidebar_open() {
            "Navigation drawer opened"
        } else {
            "Navigation drawer closed"
        };
        self.add_event(DashboardEvent::navigation(msg));
    }

    /// Track a new terminal width, in columns.
    pub fn observe_viewport(&mut self, columns: u16) {
        self.navigation.observe_viewport(columns_to_px(columns));
    }

    /// Request a forecast for `location`, superseding any in-flight request.
    pub fn select_location(&mut self, location: Location) {
        let token = self.weather.select_location(location);
        log::debug!("forecast request {} for {}", token, location.name);
        self.add_event(DashboardEvent::weather_with_level(
            format!("Fetching forecast for {}...", location.name),
            EventType::Waiting,
            LogLevel::Info,
        ));
    }

    /// Re-request the selected location.
    pub fn refresh_weather(&mut self) {
        self.select_location(self.weather.selected());
    }

    /// Open the pipeline form with the committed counters.
    pub fn begin_pipeline_edit(&mut self) {
        self.pipeline.begin_edit();
        self.focus_pipeline_field(PipelineField::Leads);
    }

    /// Move form focus, showing the draft value of the new field.
    pub fn focus_pipeline_field(&mut self, field: PipelineField) {
        let value = self
            .pipeline
            .draft()
            .map(|draft| draft.get(field))
            .unwrap_or_else(|| self.pipeline.committed().get(field));
        self.pipeline_form = PipelineForm {
            focus: field,
            input: value.to_string(),
        };
    }

    pub fn push_pipeline_char(&mut self, c: char) {
        self.pipeline_form.input.push(c);
        self.pipeline
            .update_field(self.pipeline_form.focus, &self.pipeline_form.input);
    }

    pub fn pop_pipeline_char(&mut self) {
        self.pipeline_form.input.pop();
        self.pipeline
            .update_field(self.pipeline_form.focus, &self.pipeline_form.input);
    }

    /// Commit the draft and close the form.
    pub fn save_pipeline(&mut self) {
        if let Some(saved) = self.pipeline.save() {
            self.add_event(DashboardEvent::pipeline(
                format!(
                    "Pipeline saved: {} leads, {} opportunities, {} closed deals",
                    saved.leads, saved.opportunities, saved.closed_deals
                ),
                EventType::Success,
            ));
        }
    }

    /// Discard the draft and close the form.
    pub fn cancel_pipeline_edit(&mut self) {
        if self.pipeline.is_editing() {
            self.pipeline.cancel();
            self.add_event(DashboardEvent::pipeline(
                "Pipeline edit cancelled",
                EventType::Refresh,
            ));
        }
    }

    /// Scroll the user directory, clamped to the last row.
    pub fn scroll_users(&mut self, delta: isize) {
        let last = USERS.len().saturating_sub(1);
        self.users_offset = self.users_offset.saturating_add_signed(delta).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::MockForecastSource;

    fn state() -> DashboardState {
        DashboardState::new(
            Arc::new(MockForecastSource::new()),
            &UIConfig::default(),
            1280,
        )
    }

    #[test]
    fn test_starts_on_month_with_committed_pipeline() {
        let state = state();
        assert_eq!(state.navigation.active_tab(), Tab::Month);
        assert_eq!(*state.pipeline.committed(), SALES.pipeline);
        assert!(!state.pipeline.is_editing());
        assert_eq!(state.weather.phase(), &WeatherPhase::Idle);
    }

    #[test]
    fn test_tab_switch_logs_panel_id() {
        let mut state = state();
        state.select_tab(Tab::Sales);
        assert_eq!(
            state.pending_events.back().map(|e| e.msg.as_str()),
            Some("Opened sales panel")
        );

        // Re-selecting the active panel logs nothing new
        state.select_tab(Tab::Sales);
        assert_eq!(state.pending_events.len(), 1);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(DashboardEvent::session(format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs[0].msg, "event 10");
    }

    #[test]
    fn test_non_weather_tabs_do_not_fetch() {
        let mut state = state();
        for tab in [Tab::Users, Tab::Year, Tab::Sales, Tab::Month] {
            state.select_tab(tab);
            assert_eq!(state.navigation.active_tab(), tab);
        }
        assert_eq!(state.weather.phase(), &WeatherPhase::Idle);
    }

    #[tokio::test]
    async fn test_first_weather_visit_fetches_initial_location() {
        let mut source = MockForecastSource::new();
        source
            .expect_fetch_forecast()
            .withf(|location: &Location| location.name == "Dhaka")
            .times(1)
            .returning(|_| Err(crate::weather::WeatherError::Malformed("x".into())));
        let mut state = DashboardState::new(
            Arc::new(source),
            &UIConfig::default(),
            1280,
        );

        state.select_tab(Tab::Weather);
        assert_eq!(state.weather.phase(), &WeatherPhase::Loading);
        let outcome = state.weather.next_outcome().await.unwrap();
        state.weather.complete(outcome);

        // Coming back does not refetch while a result is on screen
        state.select_tab(Tab::Month);
        state.select_tab(Tab::Weather);
        assert!(matches!(state.weather.phase(), WeatherPhase::Failed(_)));
    }

    #[test]
    fn test_pipeline_form_typing_updates_draft() {
        let mut state = state();
        state.begin_pipeline_edit();
        assert_eq!(state.pipeline_form.input, "100");

        state.pop_pipeline_char();
        state.pop_pipeline_char();
        state.push_pipeline_char('2');
        assert_eq!(state.pipeline.draft().unwrap().leads, 12);

        state.focus_pipeline_field(PipelineField::ClosedDeals);
        assert_eq!(state.pipeline_form.input, "25");
        state.push_pipeline_char('.');
        state.push_pipeline_char('9');
        assert_eq!(state.pipeline.draft().unwrap().closed_deals, 25);

        state.save_pipeline();
        assert_eq!(state.pipeline.committed().leads, 12);
        assert!(!state.pipeline.is_editing());
    }

    #[test]
    fn test_cancel_keeps_committed_values() {
        let mut state = state();
        state.begin_pipeline_edit();
        state.pop_pipeline_char();
        state.cancel_pipeline_edit();
        assert_eq!(*state.pipeline.committed(), SALES.pipeline);
        assert!(state.pipeline.draft().is_none());
    }

    #[test]
    fn test_scroll_users_is_clamped() {
        let mut state = state();
        state.scroll_users(-3);
        assert_eq!(state.users_offset, 0);
        state.scroll_users(100);
        assert_eq!(state.users_offset, USERS.len() - 1);
    }

    #[test]
    fn test_drawer_toggle_logs_navigation() {
        let mut state = state();
        state.observe_viewport(100);
        assert!(state.navigation.is_compact_viewport());
        state.toggle_drawer();
        assert!(state.navigation.sidebar_open());
        assert_eq!(
            state.pending_events.back().map(|e| e.msg.as_str()),
            Some("Navigation drawer opened")
        );
    }
}
