//! Month panel: this month's profit, daily sales and category split.

use super::super::charts::{ChartConfig, ChartKind, Series, render_chart};
use super::share_chart;
use crate::dataset::MONTH;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

pub fn chart_configs() -> Vec<ChartConfig> {
    let days: Vec<String> = (1..=MONTH.daily_sales.len()).map(|d| d.to_string()).collect();
    vec![
        ChartConfig::new(
            "Profit vs Expenses",
            ChartKind::Line,
            MONTH.week_labels.iter().map(|l| l.to_string()).collect(),
            vec![
                Series::new("Profit", &MONTH.profit, Color::Green),
                Series::new("Expenses", &MONTH.expenses, Color::Red),
            ],
        ),
        share_chart("Sales by Category", &MONTH.categories),
        ChartConfig::new(
            "Daily Sales",
            ChartKind::Bar,
            days,
            vec![Series::new("Sales", &MONTH.daily_sales, Color::Cyan)],
        ),
    ]
}

pub fn render_month_panel(f: &mut Frame, area: Rect) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_charts() {
        let configs = chart_configs();
        assert_eq!(configs.len(), 3);

        let profit = &configs[0];
        assert_eq!(profit.labels, ["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(profit.series[0].values, MONTH.profit);
        assert_eq!(profit.series[1].name, "Expenses");

        let categories = &configs[1];
        assert_eq!(categories.kind, ChartKind::Share);
        assert_eq!(
            categories.labels,
            ["Electronics", "Clothing", "Accessories", "Home"]
        );

        let daily = &configs[2];
        assert_eq!(daily.labels.len(), 30);
        assert_eq!(daily.labels[29], "30");
    }
}
