//! Event System
//!
//! Activity events raised by the dashboard and shown in the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Login and logout.
    Session,
    /// Panel and drawer changes.
    Navigation,
    /// Forecast requests and their outcomes.
    Weather,
    /// Pipeline edits.
    Pipeline,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::new(Source::Session, msg.into(), EventType::StateChange, LogLevel::Info)
    }

    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::new(
            Source::Navigation,
            msg.into(),
            EventType::StateChange,
            LogLevel::Debug,
        )
    }

    pub fn weather_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Weather, msg, event_type, log_level)
    }

    pub fn pipeline(msg: impl Into<String>, event_type: EventType) -> Self {
        Self::new(Source::Pipeline, msg.into(), event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_info_events_always_display() {
        let success = Event::weather_with_level(
            "Forecast loaded".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(success.should_display());
        assert!(Event::session("Logged in").should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::pipeline("Pipeline saved", EventType::Success);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("] Pipeline saved"));
    }
}
