//! Core data types for the Folio analytics system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stored holding: shares owned of a single instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol (uppercase)
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Number of shares held
    pub quantity: f64,
    /// Average cost per share
    pub avg_price: f64,
    /// Current market price per share
    pub current_price: f64,
    /// Sector classification
    pub sector: String,
    /// Market capitalisation tier (e.g. "Large")
    pub market_cap: String,
    /// Listing venue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
}

impl Holding {
    /// Create a holding. The symbol is normalised to uppercase.
    pub fn new(
        symbol: &str,
        name: &str,
        quantity: f64,
        avg_price: f64,
        current_price: f64,
        sector: &str,
        market_cap: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            name: name.to_string(),
            quantity,
            avg_price,
            current_price,
            sector: sector.to_string(),
            market_cap: market_cap.to_string(),
            exchange: None,
        }
    }

    /// Set the listing venue.
    pub fn on_exchange(mut self, exchange: &str) -> Self {
        self.exchange = Some(exchange.to_string());
        self
    }

    /// Amount paid for the position (quantity * avg price).
    pub fn invested(&self) -> f64 {
        self.quantity * self.avg_price
    }

    /// Current market value (quantity * current price).
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }
}

/// A holding with its derived valuation figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    /// Current market value
    pub value: f64,
    /// Unrealised gain/loss in currency
    pub gain_loss: f64,
    /// Unrealised gain/loss as a percentage of the invested amount
    pub gain_loss_percent: f64,
}

impl EnhancedHolding {
    /// Derive valuation figures for a holding.
    pub fn from_holding(holding: &Holding) -> Self {
        let value = holding.market_value();
        let invested = holding.invested();
        let gain_loss = value - invested;
        let gain_loss_percent = if invested != 0.0 {
            (gain_loss / invested) * 100.0
        } else {
            0.0
        };

        Self {
            holding: holding.clone(),
            value,
            gain_loss,
            gain_loss_percent,
        }
    }
}

/// Best or worst performing holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub symbol: String,
    pub name: String,
    pub gain_percent: f64,
}

impl From<&EnhancedHolding> for Performer {
    fn from(h: &EnhancedHolding) -> Self {
        Self {
            symbol: h.holding.symbol.clone(),
            name: h.holding.name.clone(),
            gain_percent: h.gain_loss_percent,
        }
    }
}

/// Aggregate figures over all holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_invested: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
    pub number_of_holdings: usize,
    pub top_performer: Performer,
    pub worst_performer: Performer,
    /// Configured placeholder, not derived from holdings
    pub diversification_score: f64,
    /// Configured placeholder, not derived from holdings
    pub risk_level: String,
}

/// Share of portfolio value held in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub value: f64,
    pub percentage: f64,
    pub holdings_count: usize,
}

/// Allocation breakdowns keyed by category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub by_sector: BTreeMap<String, AllocationEntry>,
    pub by_market_cap: BTreeMap<String, AllocationEntry>,
}

/// Everything derived from a set of holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub summary: PortfolioSummary,
    pub holdings: Vec<EnhancedHolding>,
    pub allocation: Allocation,
}

/// One dated valuation of the portfolio and its benchmarks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub portfolio: f64,
    pub nifty50: f64,
    pub gold: f64,
}

/// Trailing returns in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ReturnWindows {
    #[serde(rename = "1month")]
    pub one_month: f64,
    #[serde(rename = "3months")]
    pub three_months: f64,
    #[serde(rename = "1year")]
    pub one_year: f64,
}

/// Trailing returns for the portfolio and each benchmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReturns {
    pub portfolio: ReturnWindows,
    pub nifty50: ReturnWindows,
    pub gold: ReturnWindows,
}

/// Stored performance history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceHistory {
    pub timeline: Vec<TimelinePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<BenchmarkReturns>,
}

/// A single trade in the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub symbol: String,
    pub quantity: f64,
    pub price: f64,
    pub date: DateTime<Utc>,
}

impl Activity {
    /// Create an activity record.
    pub fn new(side: TradeSide, symbol: &str, quantity: f64, price: f64, date: DateTime<Utc>) -> Self {
        Self {
            side,
            symbol: symbol.to_uppercase(),
            quantity,
            price,
            date,
        }
    }

    /// Total value of the trade.
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Trade direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Everything a store persists: holdings, performance history and activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceHistory>,
    #[serde(default)]
    pub activity: Vec<Activity>,
    /// When the snapshot was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PortfolioSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot holding only the given holdings.
    pub fn with_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings,
            ..Default::default()
        }
    }
}

/// Response envelope used by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_holding_new() {
        let h = Holding::new("infy", "Infosys Ltd", 200.0, 1450.0, 1625.75, "Technology", "Large");
        assert_eq!(h.symbol, "INFY");
        assert_eq!(h.invested(), 290000.0);
        assert_eq!(h.market_value(), 325150.0);
        assert!(h.exchange.is_none());
    }

    #[test]
    fn test_enhanced_holding() {
        let h = Holding::new("A", "Alpha", 10.0, 100.0, 110.0, "Tech", "Large");
        let e = EnhancedHolding::from_holding(&h);

        assert_eq!(e.value, 1100.0);
        assert_eq!(e.gain_loss, 100.0);
        assert!((e.gain_loss_percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_enhanced_holding_zero_cost() {
        let h = Holding::new("GIFT", "Gifted", 10.0, 0.0, 50.0, "Misc", "Small");
        let e = EnhancedHolding::from_holding(&h);

        assert_eq!(e.value, 500.0);
        assert_eq!(e.gain_loss, 500.0);
        assert_eq!(e.gain_loss_percent, 0.0);
    }

    #[test]
    fn test_holding_json_shape() {
        let h = Holding::new("TCS", "Tata Consultancy Services", 75.0, 3800.0, 3990.0, "Technology", "Large")
            .on_exchange("NSE");
        let value = serde_json::to_value(EnhancedHolding::from_holding(&h)).unwrap();

        assert_eq!(value["symbol"], "TCS");
        assert_eq!(value["avgPrice"], 3800.0);
        assert_eq!(value["currentPrice"], 3990.0);
        assert_eq!(value["marketCap"], "Large");
        assert_eq!(value["exchange"], "NSE");
        assert_eq!(value["value"], 299250.0);
        assert!(value.get("holding").is_none());
    }

    #[test]
    fn test_holding_from_json_without_exchange() {
        let h: Holding = serde_json::from_value(json!({
            "symbol": "HDFCBANK",
            "name": "HDFC Bank",
            "quantity": 100,
            "avgPrice": 1500,
            "currentPrice": 1580.2,
            "sector": "Banking",
            "marketCap": "Large"
        }))
        .unwrap();

        assert_eq!(h.quantity, 100.0);
        assert!(h.exchange.is_none());
    }

    #[test]
    fn test_return_windows_keys() {
        let windows = ReturnWindows {
            one_month: 2.3,
            three_months: 8.1,
            one_year: 15.7,
        };
        let value = serde_json::to_value(windows).unwrap();
        assert_eq!(value, json!({"1month": 2.3, "3months": 8.1, "1year": 15.7}));
    }

    #[test]
    fn test_activity_json_shape() {
        let date = Utc.with_ymd_and_hms(2024, 7, 28, 10, 0, 0).unwrap();
        let activity = Activity::new(TradeSide::Buy, "infy", 50.0, 1620.0, date);
        let value = serde_json::to_value(&activity).unwrap();

        assert_eq!(value["type"], "buy");
        assert_eq!(value["symbol"], "INFY");
        assert_eq!(value["date"], "2024-07-28T10:00:00Z");
        assert_eq!(activity.value(), 81000.0);
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }
}
