//! Dashboard header component
//!
//! Renders the title, the active panel and the menu hint in compact mode

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and the active panel.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Compact layouts have no sidebar, so the header carries the menu button
    let mut left = Vec::new();
    if state.navigation.is_compact_viewport() {
        let menu_style = if state.navigation.sidebar_open() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        left.push(Span::styled("[≡ M] ", menu_style));
    }
    left.push(Span::styled(
        format!("PULSE DASHBOARD v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(Line::from(left)), chunks[0]);

    let active = Paragraph::new(Line::from(vec![
        Span::styled("Panel: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.navigation.active_tab().to_string(),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(active, chunks[1]);
}
