//! Login screen module

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Renders the login screen. There are no credentials: Enter opens the gate.
pub fn render_login(f: &mut Frame, with_background_color: bool) {
    let size = f.area();

    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            size,
        );
    }

    let [row] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(size);
    let [area] = Layout::horizontal([Constraint::Max(48)])
        .flex(Flex::Center)
        .areas(row);

    let block = Block::default()
        .title("Login")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Pulse",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Enter to login"),
        Line::from(Span::styled(
            "Press Esc to exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(paragraph, area);
}
