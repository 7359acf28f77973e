use super::Share;

/// Figures for the current month.
#[derive(Debug)]
pub struct MonthData {
    pub week_labels: [&'static str; 4],
    pub profit: [f64; 4],
    pub expenses: [f64; 4],
    pub daily_sales: [f64; 30],
    pub categories: [Share; 4],
}

pub const MONTH: MonthData = MonthData {
    week_labels: ["Week 1", "Week 2", "Week 3", "Week 4"],
    profit: [200.0, 250.0, 180.0, 220.0],
    expenses: [100.0, 120.0, 150.0, 110.0],
    daily_sales: [
        50.0, 60.0, 45.0, 70.0, 55.0, 80.0, 65.0, 75.0, 60.0, 85.0, //
        70.0, 90.0, 55.0, 60.0, 75.0, 80.0, 65.0, 70.0, 85.0, 90.0, //
        60.0, 55.0, 70.0, 65.0, 80.0, 75.0, 60.0, 85.0, 70.0, 90.0,
    ],
    categories: [
        Share {
            label: "Electronics",
            value: 300.0,
        },
        Share {
            label: "Clothing",
            value: 200.0,
        },
        Share {
            label: "Accessories",
            value: 150.0,
        },
        Share {
            label: "Home",
            value: 100.0,
        },
    ],
};
