use serde::{Deserialize, Serialize};

/// Latest quote snapshot as returned by a provider.
///
/// Every market field is optional: providers routinely omit or null out
/// values for indices, halted securities, and freshly listed symbols.
/// Consumers are expected to apply their own defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    /// Canonical provider symbol (may differ from the requested string)
    pub symbol: String,

    #[serde(default)]
    pub long_name: Option<String>,

    #[serde(default)]
    pub short_name: Option<String>,

    #[serde(default)]
    pub regular_market_price: Option<f64>,

    #[serde(default)]
    pub regular_market_change: Option<f64>,

    #[serde(default)]
    pub regular_market_change_percent: Option<f64>,

    #[serde(default)]
    pub regular_market_previous_close: Option<f64>,

    #[serde(default)]
    pub regular_market_open: Option<f64>,

    #[serde(default)]
    pub regular_market_day_high: Option<f64>,

    #[serde(default)]
    pub regular_market_day_low: Option<f64>,

    #[serde(default)]
    pub regular_market_volume: Option<f64>,

    #[serde(default)]
    pub market_cap: Option<f64>,

    /// Quote currency (e.g., "USD")
    #[serde(default)]
    pub currency: Option<String>,

    /// Exchange code (e.g., "NMS")
    #[serde(default)]
    pub exchange: Option<String>,

    /// Instrument type (e.g., "EQUITY", "INDEX")
    #[serde(default)]
    pub quote_type: Option<String>,
}

impl RawQuote {
    /// Create an empty quote for the given symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}
