//! Portfolio analytics module.
//!
//! Provides holdings metrics, allocation breakdowns and performance analytics.

mod metrics;
mod performance;

pub use metrics::{calculate, calculate_with};
pub use performance::{holding_period_return, trailing_returns};
