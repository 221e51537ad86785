//! Bundled sample dataset used for seeding and demos.

use crate::types::{
    Activity, BenchmarkReturns, Holding, PerformanceHistory, PortfolioSnapshot, ReturnWindows,
    TimelinePoint, TradeSide,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

impl PortfolioSnapshot {
    /// Four large-cap holdings with a short performance history and trade feed.
    pub fn sample() -> Self {
        Self {
            holdings: sample_holdings(),
            performance: Some(sample_performance()),
            activity: sample_activity(),
            updated_at: None,
        }
    }
}

fn sample_holdings() -> Vec<Holding> {
    vec![
        Holding::new("RELIANCE", "Reliance Industries", 50.0, 2800.0, 2950.55, "Energy", "Large"),
        Holding::new("HDFCBANK", "HDFC Bank", 100.0, 1500.0, 1580.20, "Banking", "Large"),
        Holding::new("INFY", "Infosys Ltd", 200.0, 1450.0, 1625.75, "Technology", "Large"),
        Holding::new("TCS", "Tata Consultancy Services", 75.0, 3800.0, 3990.00, "Technology", "Large"),
    ]
}

fn sample_performance() -> PerformanceHistory {
    let point = |(y, m, d): (i32, u32, u32), portfolio: f64, nifty50: f64, gold: f64| TimelinePoint {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        portfolio,
        nifty50,
        gold,
    };

    PerformanceHistory {
        timeline: vec![
            point((2024, 1, 1), 650000.0, 21000.0, 62000.0),
            point((2024, 3, 1), 680000.0, 22100.0, 64500.0),
            point((2024, 6, 1), 700000.0, 23500.0, 68000.0),
        ],
        returns: Some(BenchmarkReturns {
            portfolio: ReturnWindows {
                one_month: 2.3,
                three_months: 8.1,
                one_year: 15.7,
            },
            nifty50: ReturnWindows {
                one_month: 1.8,
                three_months: 6.2,
                one_year: 12.4,
            },
            gold: ReturnWindows {
                one_month: -0.5,
                three_months: 4.1,
                one_year: 8.9,
            },
        }),
    }
}

fn sample_activity() -> Vec<Activity> {
    let at = |m: u32, d: u32, h: u32, min: u32| -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, m, d, h, min, 0)
            .single()
            .unwrap_or_default()
    };

    vec![
        Activity::new(TradeSide::Buy, "INFY", 50.0, 1620.00, at(7, 28, 10, 0)),
        Activity::new(TradeSide::Sell, "RELIANCE", 10.0, 2980.00, at(7, 25, 14, 30)),
        Activity::new(TradeSide::Buy, "HDFCBANK", 30.0, 1575.50, at(7, 22, 9, 45)),
        Activity::new(TradeSide::Buy, "TCS", 25.0, 3950.00, at(7, 20, 11, 0)),
        Activity::new(TradeSide::Sell, "INFY", 20.0, 1650.00, at(7, 18, 15, 0)),
    ]
}
