//! Dashboard sidebar component
//!
//! Lists the panels. Docked beside the content on wide terminals, drawn as a
//! drawer over it on compact ones.

use super::super::state::DashboardState;
use crate::navigation::Tab;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let active = state.navigation.active_tab();
    let mut lines: Vec<Line> = Tab::all()
        .into_iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if tab == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {:<10}", tab.to_string()), style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "L  Logout",
        Style::default().fg(Color::LightRed),
    )));

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .title("MENU")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::uniform(1)),
    );

    // The drawer overlaps the panel, so wipe what is underneath first
    if !state.navigation.sidebar_docked() {
        f.render_widget(Clear, area);
    }
    f.render_widget(sidebar, area);
}
