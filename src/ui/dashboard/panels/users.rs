//! Users panel: the scrollable user directory.

use super::super::state::DashboardState;
use crate::dataset::{USERS, User};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table};

/// Rows visible from `offset` in a table body `height` rows tall.
pub fn visible_users(offset: usize, height: usize) -> &'static [User] {
    let users: &'static [User] = &USERS;
    let start = offset.min(users.len());
    let end = start.saturating_add(height).min(users.len());
    &users[start..end]
}

pub fn render_users_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Email"),
        Cell::from("Phone"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    // One row for the header
    let body_height = area.height.saturating_sub(1) as usize;
    let rows = visible_users(state.users_offset, body_height)
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.id.to_string()),
                Cell::from(user.name),
                Cell::from(user.email),
                Cell::from(user.phone),
            ])
            .style(Style::default().fg(Color::White))
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(22),
            Constraint::Fill(1),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_widget(table, area);

    let mut scrollbar_state = ScrollbarState::new(USERS.len())
        .position(state.users_offset)
        .viewport_content_length(body_height);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(Color::Cyan));
    let scroll_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    };
    f.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
}
