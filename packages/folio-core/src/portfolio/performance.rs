//! Portfolio performance analytics.

use crate::types::{BenchmarkReturns, PerformanceHistory, ReturnWindows, TimelinePoint};
use chrono::{Months, NaiveDate};

/// Calculate holding period return in percent.
pub fn holding_period_return(initial_value: f64, final_value: f64) -> f64 {
    if initial_value <= 0.0 {
        return 0.0;
    }
    ((final_value - initial_value) / initial_value) * 100.0
}

/// Trailing 1 month, 3 month and 1 year returns for a dated value series.
///
/// Each window measures from the latest point dated on or before
/// `last date - window` to the last point. When the series does not reach
/// back that far, the earliest point is used instead. The series must be
/// sorted by date.
pub fn trailing_returns(series: &[(NaiveDate, f64)]) -> ReturnWindows {
    let Some(&(last_date, last_value)) = series.last() else {
        return ReturnWindows::default();
    };

    let window = |months: u32| -> f64 {
        let start = last_date
            .checked_sub_months(Months::new(months))
            .and_then(|cutoff| series.iter().rev().find(|(date, _)| *date <= cutoff))
            .or_else(|| series.first())
            .map(|&(_, value)| value)
            .unwrap_or(last_value);
        holding_period_return(start, last_value)
    };

    ReturnWindows {
        one_month: window(1),
        three_months: window(3),
        one_year: window(12),
    }
}

impl PerformanceHistory {
    /// Create a history from a timeline, without stored returns.
    pub fn from_timeline(mut timeline: Vec<TimelinePoint>) -> Self {
        timeline.sort_by_key(|p| p.date);
        Self {
            timeline,
            returns: None,
        }
    }

    /// Trailing returns for the portfolio and each benchmark, derived from the timeline.
    ///
    /// The timeline may be in any order; points are ranked by date first.
    pub fn derived_returns(&self) -> BenchmarkReturns {
        BenchmarkReturns {
            portfolio: trailing_returns(&series(&self.timeline, |p| p.portfolio)),
            nifty50: trailing_returns(&series(&self.timeline, |p| p.nifty50)),
            gold: trailing_returns(&series(&self.timeline, |p| p.gold)),
        }
    }

    /// Return this history with `returns` filled in from the timeline when missing.
    pub fn resolved(mut self) -> Self {
        if self.returns.is_none() {
            tracing::debug!(points = self.timeline.len(), "Deriving returns from timeline");
            self.returns = Some(self.derived_returns());
        }
        self
    }
}

fn series<F>(timeline: &[TimelinePoint], value: F) -> Vec<(NaiveDate, f64)>
where
    F: Fn(&TimelinePoint) -> f64,
{
    let mut series: Vec<(NaiveDate, f64)> = timeline.iter().map(|p| (p.date, value(p))).collect();
    series.sort_by_key(|&(date, _)| date);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(d: NaiveDate, portfolio: f64, nifty50: f64, gold: f64) -> TimelinePoint {
        TimelinePoint {
            date: d,
            portfolio,
            nifty50,
            gold,
        }
    }

    #[test]
    fn test_holding_period_return() {
        let hpr = holding_period_return(10000.0, 11500.0);
        assert!((hpr - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_holding_period_return_zero_start() {
        assert_eq!(holding_period_return(0.0, 500.0), 0.0);
    }

    #[test]
    fn test_trailing_returns_empty_and_single() {
        assert_eq!(trailing_returns(&[]), ReturnWindows::default());
        assert_eq!(
            trailing_returns(&[(date(2024, 1, 1), 100.0)]),
            ReturnWindows::default()
        );
    }

    #[test]
    fn test_trailing_returns_windows() {
        let series = vec![
            (date(2023, 6, 1), 80.0),
            (date(2024, 3, 1), 100.0),
            (date(2024, 5, 1), 110.0),
            (date(2024, 6, 1), 121.0),
        ];
        let r = trailing_returns(&series);

        // 1 month: from 2024-05-01
        assert_relative_eq!(r.one_month, 10.0, epsilon = 1e-9);
        // 3 months: from 2024-03-01
        assert_relative_eq!(r.three_months, 21.0, epsilon = 1e-9);
        // 1 year: from 2023-06-01
        assert_relative_eq!(r.one_year, 51.25, epsilon = 1e-9);
    }

    #[test]
    fn test_trailing_returns_short_history_uses_earliest() {
        let series = vec![(date(2024, 5, 20), 100.0), (date(2024, 6, 1), 105.0)];
        let r = trailing_returns(&series);

        assert_relative_eq!(r.one_month, 5.0, epsilon = 1e-9);
        assert_relative_eq!(r.one_year, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_resolved_keeps_stored_returns() {
        let stored = BenchmarkReturns {
            portfolio: ReturnWindows {
                one_month: 2.3,
                three_months: 8.1,
                one_year: 15.7,
            },
            ..Default::default()
        };
        let history = PerformanceHistory {
            timeline: vec![point(date(2024, 1, 1), 1.0, 1.0, 1.0)],
            returns: Some(stored.clone()),
        };

        assert_eq!(history.resolved().returns, Some(stored));
    }

    #[test]
    fn test_resolved_derives_missing_returns() {
        let history = PerformanceHistory::from_timeline(vec![
            point(date(2024, 6, 1), 700000.0, 23500.0, 68000.0),
            point(date(2024, 1, 1), 650000.0, 21000.0, 62000.0),
            point(date(2024, 3, 1), 680000.0, 22100.0, 62000.0),
        ]);
        assert_eq!(history.timeline[0].date, date(2024, 1, 1));

        let returns = history.resolved().returns.unwrap();
        // 3 months back from June lands on the March point
        assert_relative_eq!(
            returns.portfolio.three_months,
            (700000.0 - 680000.0) / 680000.0 * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            returns.nifty50.one_year,
            (23500.0 - 21000.0) / 21000.0 * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(returns.gold.three_months, (68000.0 - 62000.0) / 62000.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_resolved_sorts_stored_timeline() {
        // Stored files keep whatever order they were written in
        let history: PerformanceHistory = serde_json::from_value(serde_json::json!({
            "timeline": [
                { "date": "2024-06-01", "portfolio": 700000.0, "nifty50": 23500.0, "gold": 68000.0 },
                { "date": "2024-01-01", "portfolio": 650000.0, "nifty50": 21000.0, "gold": 62000.0 },
                { "date": "2024-03-01", "portfolio": 680000.0, "nifty50": 22100.0, "gold": 62000.0 }
            ]
        }))
        .unwrap();
        assert_eq!(history.timeline[0].date, date(2024, 6, 1));

        let sorted = PerformanceHistory::from_timeline(history.timeline.clone());
        let returns = history.resolved().returns.unwrap();
        assert_eq!(returns, sorted.derived_returns());

        // 1 month and 3 months both fall back to the March point
        let from_march = (700000.0 - 680000.0) / 680000.0 * 100.0;
        assert_relative_eq!(returns.portfolio.one_month, from_march, epsilon = 1e-9);
        assert_relative_eq!(returns.portfolio.three_months, from_march, epsilon = 1e-9);
        assert_relative_eq!(
            returns.portfolio.one_year,
            (700000.0 - 650000.0) / 650000.0 * 100.0,
            epsilon = 1e-9
        );
    }
}
