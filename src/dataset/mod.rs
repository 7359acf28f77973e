//! Static demo data behind the dashboard panels.
//!
//! Everything here is fixed at compile time and never mutated; the panels read
//! it to build their chart configurations.

mod month;
mod sales;
mod users;
mod year;

pub use month::{MONTH, MonthData};
pub use sales::{DealCategory, PipelineStatus, SALES, SalesMetrics};
pub use users::{USERS, User};
pub use year::{YEAR, YearData};

/// Short month labels used by the year and sales series.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A labelled value in a share (pie-style) chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub label: &'static str,
    pub value: f64,
}
