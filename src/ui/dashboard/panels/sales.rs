//! Sales panel: KPI cards, the editable pipeline and sales charts.

use super::super::charts::{ChartConfig, ChartKind, Series, render_chart};
use super::super::state::DashboardState;
use super::super::utils::format_currency;
use crate::dataset::{MONTH_LABELS, SALES, Share};
use crate::pipeline::PipelineField;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use strum::IntoEnumIterator;

/// Label and formatted value of each KPI card.
pub fn kpi_cards() -> Vec<(&'static str, String)> {
    vec![
        ("Total Revenue", format_currency(SALES.total_revenue)),
        ("Closed Deals", SALES.closed_deals.to_string()),
        ("Average Deal Size", format_currency(SALES.average_deal_size)),
        ("Conversion Rate", format!("{}%", SALES.conversion_rate)),
    ]
}

pub fn chart_configs() -> Vec<ChartConfig> {
    let categories: Vec<Share> = SALES
        .deal_categories
        .iter()
        .map(|c| Share {
            label: c.category,
            value: c.value,
        })
        .collect();
    vec![
        ChartConfig::new(
            "Monthly Sales Trend",
            ChartKind::Line,
            MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
            vec![Series::new("Sales", &SALES.monthly_sales, Color::Cyan)],
        ),
        super::share_chart("Deal Categories", &categories),
    ]
}

pub fn render_sales_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(8),
        ])
        .split(area);

    render_kpi_cards(f, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let configs = chart_configs();
    if state.pipeline.is_editing() {
        render_pipeline_form(f, middle[0], state);
    } else {
        render_pipeline_table(f, middle[0], state);
    }
    render_chart(f, middle[1], &configs[0]);
    render_chart(f, rows[2], &configs[1]);
}

fn render_kpi_cards(f: &mut Frame, area: Rect) {
    let cards = kpi_cards();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for ((label, value), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(card, *chunk);
    }
}

fn render_pipeline_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let committed = state.pipeline.committed();
    let rows = PipelineField::iter().map(|field| {
        Row::new(vec![
            Cell::from(field.to_string()),
            Cell::from(committed.get(field).to_string()),
        ])
    });

    let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(10)])
        .header(
            Row::new(vec!["Stage", "Count"]).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(
            Block::default()
                .title("Pipeline Status")
                .title_bottom(Line::from("[E] Edit").right_aligned())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(table, area);
}

/// Text shown for `field` in the open form: the raw input for the focused
/// field, the draft value for the rest.
pub fn form_value(state: &DashboardState, field: PipelineField) -> String {
    if field == state.pipeline_form.focus {
        return state.pipeline_form.input.clone();
    }
    state
        .pipeline
        .draft()
        .map(|draft| draft.get(field).to_string())
        .unwrap_or_default()
}

fn render_pipeline_form(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = PipelineField::iter()
        .map(|field| {
            let focused = field == state.pipeline_form.focus;
            let marker = if focused { "▶ " } else { "  " };
            let cursor = if focused && state.tick % 10 < 5 { "▏" } else { " " };
            let value_style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::LightYellow)),
                Span::styled(
                    format!("{:<14}", field.to_string()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(" {}{} ", form_value(state, field), cursor),
                    value_style,
                ),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Save  [Esc] Cancel  [Tab] Next field",
        Style::default().fg(Color::DarkGray),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .title("Edit Pipeline")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::LightYellow)),
    );
    f.render_widget(form, area);
}
