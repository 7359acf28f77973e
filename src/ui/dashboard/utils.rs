//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Session => Color::LightBlue,
        Source::Navigation => Color::Gray,
        Source::Weather => Color::Cyan,
        Source::Pipeline => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to the raw timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten large figures for axis labels and bar values: 1500000 -> "1.5M".
pub fn format_compact_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_decimal(value / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}k", trim_decimal(value / 1_000.0))
    } else {
        trim_decimal(value)
    }
}

fn trim_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Format a whole-dollar amount with thousands separators.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Frames of the loading spinner.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}
