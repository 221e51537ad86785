//! Portfolio metrics: enhanced holdings, summary and allocation.

use crate::config::MetricsConfig;
use crate::types::{
    Allocation, AllocationEntry, EnhancedHolding, Holding, Performer, PortfolioMetrics,
    PortfolioSummary,
};
use crate::{Error, Result};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Calculate portfolio metrics using the default placeholder values.
pub fn calculate(holdings: &[Holding]) -> Result<PortfolioMetrics> {
    calculate_with(holdings, &MetricsConfig::default())
}

/// Calculate portfolio metrics from a set of holdings.
///
/// Every holding is validated before any figure is derived; the first
/// invalid one aborts the whole calculation.
///
/// # Errors
///
/// Returns `Error::Validation` if `holdings` is empty, any holding has a
/// quantity or price that is not a finite, non-negative number, or a derived
/// figure overflows to infinity.
pub fn calculate_with(holdings: &[Holding], config: &MetricsConfig) -> Result<PortfolioMetrics> {
    validate(holdings)?;

    let enhanced: Vec<EnhancedHolding> = holdings.iter().map(EnhancedHolding::from_holding).collect();
    validate_derived(&enhanced)?;

    let total_value: f64 = enhanced.iter().map(|h| h.value).sum();
    let total_invested: f64 = holdings.iter().map(Holding::invested).sum();
    if !total_value.is_finite() || !total_invested.is_finite() {
        return Err(Error::Validation(
            "malformed holdings: portfolio totals exceed the numeric range".to_string(),
        ));
    }
    let total_gain_loss = total_value - total_invested;
    let total_gain_loss_percent = if total_invested != 0.0 {
        (total_gain_loss / total_invested) * 100.0
    } else {
        0.0
    };

    let (top_performer, worst_performer) = performers(&enhanced)?;

    let allocation = Allocation {
        by_sector: allocate(&enhanced, total_value, |h| &h.sector),
        by_market_cap: allocate(&enhanced, total_value, |h| &h.market_cap),
    };

    tracing::debug!(
        holdings = enhanced.len(),
        total_value,
        total_invested,
        "Calculated portfolio metrics"
    );

    Ok(PortfolioMetrics {
        summary: PortfolioSummary {
            total_value,
            total_invested,
            total_gain_loss,
            total_gain_loss_percent,
            number_of_holdings: enhanced.len(),
            top_performer,
            worst_performer,
            diversification_score: config.diversification_score,
            risk_level: config.risk_level.clone(),
        },
        holdings: enhanced,
        allocation,
    })
}

fn validate(holdings: &[Holding]) -> Result<()> {
    if holdings.is_empty() {
        return Err(Error::Validation("empty or missing holdings".to_string()));
    }

    for (idx, h) in holdings.iter().enumerate() {
        let fields = [
            ("quantity", h.quantity),
            ("currentPrice", h.current_price),
            ("avgPrice", h.avg_price),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(Error::Validation(format!(
                "malformed holding at index {} ({}): {} is {}",
                idx, h.symbol, field, value
            )));
        }
    }

    Ok(())
}

/// Finite inputs can still overflow once multiplied or divided.
fn validate_derived(enhanced: &[EnhancedHolding]) -> Result<()> {
    for (idx, h) in enhanced.iter().enumerate() {
        let fields = [
            ("invested", h.holding.invested()),
            ("value", h.value),
            ("gainLoss", h.gain_loss),
            ("gainLossPercent", h.gain_loss_percent),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Validation(format!(
                "malformed holding at index {} ({}): {} exceeds the numeric range",
                idx, h.holding.symbol, field
            )));
        }
    }

    Ok(())
}

/// Best and worst holdings by gain percentage.
///
/// A stable descending sort keeps input order among ties, so the first
/// occurrence wins for the top and the last occurrence for the bottom.
fn performers(enhanced: &[EnhancedHolding]) -> Result<(Performer, Performer)> {
    let mut ranked: Vec<&EnhancedHolding> = enhanced.iter().collect();
    ranked.sort_by(|a, b| {
        b.gain_loss_percent
            .partial_cmp(&a.gain_loss_percent)
            .unwrap_or(Ordering::Equal)
    });

    match (ranked.first(), ranked.last()) {
        (Some(top), Some(worst)) => Ok((Performer::from(*top), Performer::from(*worst))),
        _ => Err(Error::Validation("empty or missing holdings".to_string())),
    }
}

fn allocate<F>(enhanced: &[EnhancedHolding], total_value: f64, key: F) -> BTreeMap<String, AllocationEntry>
where
    F: Fn(&Holding) -> &String,
{
    let mut buckets: BTreeMap<String, AllocationEntry> = BTreeMap::new();
    for h in enhanced {
        let entry = buckets.entry(key(&h.holding).clone()).or_default();
        entry.value += h.value;
        entry.holdings_count += 1;
    }

    for entry in buckets.values_mut() {
        entry.percentage = if total_value != 0.0 {
            (entry.value / total_value) * 100.0
        } else {
            0.0
        };
    }

    buckets
}
