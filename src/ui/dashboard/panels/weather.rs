//! Weather panel: location selector, current conditions and the next 24 hours.

use super::super::charts::{ChartConfig, ChartKind, Series, render_chart};
use super::super::state::DashboardState;
use super::super::utils::spinner_frame;
use crate::consts::cli_consts::weather::HOURLY_WINDOW;
use crate::weather::{LOCATIONS, Location, WeatherPhase, WeatherSnapshot};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const ATTRIBUTION: &str = "Data provided by Open-Meteo Weather API";

/// Temperature line over the first 24 hourly readings, from local midnight.
pub fn hourly_chart(snapshot: &WeatherSnapshot) -> ChartConfig {
    let hours = snapshot.first_hours(HOURLY_WINDOW);
    let temperatures: Vec<f64> = hours
        .iter()
        .map(|r| r.temperature.unwrap_or(f64::NAN))
        .collect();
    ChartConfig::new(
        "24-Hour Temperature Forecast",
        ChartKind::Line,
        hours
            .iter()
            .map(|r| r.time.format("%H:%M").to_string())
            .collect(),
        vec![Series::new("Temperature", &temperatures, Color::LightYellow)],
    )
}

/// Lines of the current conditions card.
pub fn conditions_lines(location: &Location, snapshot: &WeatherSnapshot) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            location.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            snapshot.display_time(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}°C", snapshot.rounded_temperature()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} ", snapshot.icon())),
            Span::styled(snapshot.condition(), Style::default().fg(Color::LightBlue)),
        ]),
    ]
}

pub fn render_weather_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_location_selector(f, rows[0], state.weather.selected());

    match state.weather.phase() {
        WeatherPhase::Idle => {
            let hint = Paragraph::new("Press R to load the forecast")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, rows[1]);
        }
        WeatherPhase::Loading => {
            let loading = Paragraph::new(format!(
                "{} Loading forecast for {}...",
                spinner_frame(state.tick),
                state.weather.selected().name
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightBlue));
            f.render_widget(loading, rows[1]);
        }
        WeatherPhase::Failed(message) => {
            let error = Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(error, rows[1]);
        }
        WeatherPhase::Ready(snapshot) => {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(6), Constraint::Fill(1)])
                .split(rows[1]);

            let card = Paragraph::new(conditions_lines(&state.weather.selected(), snapshot))
                .block(
                    Block::default()
                        .title("Current Conditions")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .padding(Padding::horizontal(1)),
                );
            f.render_widget(card, body[0]);
            render_chart(f, body[1], &hourly_chart(snapshot));
        }
    }

    let attribution = Paragraph::new(ATTRIBUTION)
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
    f.render_widget(attribution, rows[2]);
}

fn render_location_selector(f: &mut Frame, area: Rect, selected: Location) {
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(Color::DarkGray))];
    for (i, location) in LOCATIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *location == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", location.name), style));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Location")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(selector, area);
}
