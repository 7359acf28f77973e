//! Dashboard panels
//!
//! Exactly one panel is drawn at a time: the one matching the active tab.

pub mod month;
pub mod sales;
pub mod users;
pub mod weather;
pub mod year;

use super::charts::{ChartConfig, ChartKind, Series};
use super::state::DashboardState;
use crate::dataset::Share;
use crate::navigation::Tab;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Title drawn on the panel's border.
pub fn panel_title(tab: Tab) -> &'static str {
    match tab {
        Tab::Month => "MONTH OVERVIEW",
        Tab::Users => "USER DIRECTORY",
        Tab::Year => "YEAR OVERVIEW",
        Tab::Sales => "SALES OVERVIEW",
        Tab::Weather => "WEATHER FORECAST",
    }
}

pub(crate) fn panel_block(tab: Tab) -> Block<'static> {
    Block::default()
        .title(panel_title(tab))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

/// A share chart over labelled values.
pub(crate) fn share_chart(title: &str, shares: &[Share]) -> ChartConfig {
    let values: Vec<f64> = shares.iter().map(|s| s.value).collect();
    ChartConfig::new(
        title,
        ChartKind::Share,
        shares.iter().map(|s| s.label.to_string()).collect(),
        vec![Series::new("Share", &values, Color::Cyan)],
    )
}

/// Render the panel for the active tab into `area`.
pub fn render_active_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tab = state.navigation.active_tab();
    let block = panel_block(tab);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::Month => month::render_month_panel(f, inner),
        Tab::Users => users::render_users_panel(f, inner, state),
        Tab::Year => year::render_year_panel(f, inner),
        Tab::Sales => sales::render_sales_panel(f, inner, state),
        Tab::Weather => weather::render_weather_panel(f, inner, state),
    }
}
