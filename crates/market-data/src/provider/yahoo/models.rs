//! Yahoo Finance API response models.
//!
//! These models cover the v7 quote and v8 chart endpoints. Chart data comes
//! back columnar (one array per field, aligned with `timestamp`) and is
//! zipped into rows by the provider.

use serde::Deserialize;

use crate::models::RawQuote;

/// Response wrapper for the v7 quote API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResponse {
    pub quote_response: YahooQuoteResponseBody,
}

#[derive(Debug, Deserialize)]
pub struct YahooQuoteResponseBody {
    #[serde(default)]
    pub result: Vec<RawQuote>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// Response wrapper for the v8 chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChartBody,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartBody {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// One chart series
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    /// Bar timestamps in unix seconds. Absent when the range has no bars.
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: YahooIndicators,
}

#[derive(Debug, Default, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooIndicatorQuote>,
}

/// OHLCV columns aligned with `YahooChartResult::timestamp`
#[derive(Debug, Default, Deserialize)]
pub struct YahooIndicatorQuote {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<f64>>>,
}

/// Error object embedded in Yahoo responses
#[derive(Debug, Clone, Deserialize)]
pub struct YahooApiError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl YahooApiError {
    /// Render as "<code>: <description>", or just the code.
    pub fn message(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!("{}: {}", self.code, description)
            }
            _ => self.code.clone(),
        }
    }
}
