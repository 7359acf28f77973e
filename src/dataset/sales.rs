/// Counters of the sales funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineStatus {
    pub leads: u64,
    pub opportunities: u64,
    /// Independent of [`SalesMetrics::closed_deals`]; nothing keeps them in sync.
    pub closed_deals: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealCategory {
    pub category: &'static str,
    pub value: f64,
}

#[derive(Debug)]
pub struct SalesMetrics {
    pub total_revenue: u64,
    pub closed_deals: u64,
    pub average_deal_size: u64,
    /// Percentage of leads converted.
    pub conversion_rate: u8,
    pub pipeline: PipelineStatus,
    pub monthly_sales: [f64; 12],
    pub deal_categories: [DealCategory; 4],
}

pub const SALES: SalesMetrics = SalesMetrics {
    total_revenue: 1_500_000,
    closed_deals: 25,
    average_deal_size: 60_000,
    conversion_rate: 20,
    pipeline: PipelineStatus {
        leads: 100,
        opportunities: 50,
        closed_deals: 25,
    },
    monthly_sales: [
        120_000.0, 150_000.0, 180_000.0, 200_000.0, 170_000.0, 190_000.0, 220_000.0, 210_000.0,
        230_000.0, 250_000.0, 240_000.0, 260_000.0,
    ],
    deal_categories: [
        DealCategory {
            category: "Product",
            value: 600_000.0,
        },
        DealCategory {
            category: "Service",
            value: 400_000.0,
        },
        DealCategory {
            category: "Consulting",
            value: 300_000.0,
        },
        DealCategory {
            category: "Others",
            value: 200_000.0,
        },
    ],
};
