//! Domain models for stock data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily point on the price history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: DateTime<Utc>,
    pub close: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
}

/// Normalized, display-ready stock data.
///
/// Every numeric field except `market_cap` is always present (missing
/// provider values become zero). `market_cap` stays optional so an unknown
/// capitalization is distinguishable from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Provider's canonical symbol
    pub symbol: String,
    /// Display name, never empty
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub previous_close: Decimal,
    pub open: Decimal,
    pub day_high: Decimal,
    pub day_low: Decimal,
    pub volume: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,
    /// Chronological daily history, invalid points removed
    pub history: Vec<HistoryPoint>,
}
