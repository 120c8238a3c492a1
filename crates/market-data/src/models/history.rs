use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily history as returned by a provider's chart endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHistory {
    /// Points in provider order (chronological). `None` when the provider
    /// returned no points collection at all.
    #[serde(default)]
    pub quotes: Option<Vec<RawHistoryPoint>>,
}

impl RawHistory {
    pub fn new(quotes: Vec<RawHistoryPoint>) -> Self {
        Self {
            quotes: Some(quotes),
        }
    }
}

/// One daily bar. A missing `close` marks a non-trading or invalid entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawHistoryPoint {
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub close: Option<f64>,

    #[serde(default)]
    pub open: Option<f64>,

    #[serde(default)]
    pub high: Option<f64>,

    #[serde(default)]
    pub low: Option<f64>,

    #[serde(default)]
    pub volume: Option<f64>,
}

impl RawHistoryPoint {
    /// Create a full OHLC point
    pub fn ohlc(date: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            close: Some(close),
            open: Some(open),
            high: Some(high),
            low: Some(low),
            volume: None,
        }
    }

    /// Create a point with every price missing
    pub fn empty(date: DateTime<Utc>) -> Self {
        Self {
            date,
            close: None,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }
}
