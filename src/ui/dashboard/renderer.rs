//! Dashboard main renderer

use super::components::{footer, header, logs, sidebar};
use super::panels::render_active_panel;
use super::state::DashboardState;
use crate::consts::cli_consts::viewport::SIDEBAR_WIDTH;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let body = main_chunks[1];
    if state.navigation.sidebar_docked() {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
            .split(body);
        sidebar::render_sidebar(f, content_chunks[0], state);
        render_active_panel(f, content_chunks[1], state);
    } else {
        render_active_panel(f, body, state);
        if state.navigation.sidebar_open() {
            sidebar::render_sidebar(f, drawer_area(body), state);
        }
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

/// Where the drawer sits: the left edge of the body, full height.
fn drawer_area(body: Rect) -> Rect {
    Rect {
        width: SIDEBAR_WIDTH.min(body.width),
        ..body
    }
}
