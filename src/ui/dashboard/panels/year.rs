//! Year panel: monthly profit and loss, sales and category split.

use super::super::charts::{ChartConfig, ChartKind, Series, render_chart};
use super::share_chart;
use crate::dataset::{MONTH_LABELS, YEAR};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

pub fn chart_configs() -> Vec<ChartConfig> {
    let months: Vec<String> = MONTH_LABELS.iter().map(|m| m.to_string()).collect();
    vec![
        ChartConfig::new(
            "Profit vs Loss",
            ChartKind::Line,
            months.clone(),
            vec![
                Series::new("Profit", &YEAR.profit, Color::Green),
                Series::new("Loss", &YEAR.loss, Color::Red),
            ],
        ),
        share_chart("Profit by Category", &YEAR.categories),
        ChartConfig::new(
            "Sales by Month",
            ChartKind::Bar,
            months,
            vec![Series::new("Sales", &YEAR.sales, Color::Magenta)],
        ),
    ]
}

pub fn render_year_panel(f: &mut Frame, area: Rect) {
    let configs = chart_configs();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    render_chart(f, top[0], &configs[0]);
    render_chart(f, top[1], &configs[1]);
    render_chart(f, rows[1], &configs[2]);
}
