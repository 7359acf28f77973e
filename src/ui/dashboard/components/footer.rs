//! Dashboard footer component
//!
//! Renders key hints for the active panel

use super::super::state::DashboardState;
use crate::navigation::Tab;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hints for the current state.
pub fn footer_text(state: &DashboardState) -> String {
    if state.pipeline.is_editing() {
        return "[Enter] Save | [Esc] Cancel | [Tab] Next field | [Backspace] Delete".to_string();
    }

    let mut hints = vec!["[1-5] Panels", "[Tab] Next"];
    if state.navigation.is_compact_viewport() {
        hints.push("[M] Menu");
    }
    match state.navigation.active_tab() {
        Tab::Users => hints.push("[↑/↓] Scroll"),
        Tab::Sales => hints.push("[E] Edit pipeline"),
        Tab::Weather => {
            hints.push("[←/→] Location");
            hints.push("[R] Refresh");
        }
        Tab::Month | Tab::Year => {}
    }
    hints.push("[L] Logout");
    hints.push("[Q] Quit");
    hints.join(" | ")
}

/// Render enhanced footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_color = if state.pipeline.is_editing() {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let footer = Paragraph::new(footer_text(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
