use super::Share;

/// Figures for the current year, one value per month.
#[derive(Debug)]
pub struct YearData {
    pub profit: [f64; 12],
    pub loss: [f64; 12],
    pub sales: [f64; 12],
    pub categories: [Share; 4],
}

pub const YEAR: YearData = YearData {
    profit: [
        50.0, 60.0, 45.0, 70.0, 55.0, 80.0, 65.0, 75.0, 60.0, 85.0, 70.0, 90.0,
    ],
    loss: [
        20.0, 25.0, 30.0, 15.0, 25.0, 20.0, 30.0, 25.0, 35.0, 20.0, 25.0, 15.0,
    ],
    sales: [
        100.0, 120.0, 90.0, 130.0, 110.0, 140.0, 125.0, 135.0, 115.0, 150.0, 130.0, 160.0,
    ],
    categories: [
        Share {
            label: "Electronics",
            value: 200.0,
        },
        Share {
            label: "Clothing",
            value: 150.0,
        },
        Share {
            label: "Food",
            value: 100.0,
        },
        Share {
            label: "Others",
            value: 50.0,
        },
    ],
};
