//! Yahoo Finance quote provider.
//!
//! Talks to the public Yahoo Finance endpoints:
//! - v7 `quote` for the latest snapshot (requires a cookie + crumb pair)
//! - v8 `chart` for daily history

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{header, StatusCode};
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{ChartOptions, RawHistory, RawHistoryPoint, RawQuote};
use crate::provider::QuoteProvider;

use models::{YahooChartResponse, YahooChartResult, YahooQuoteResponse};

const PROVIDER_ID: &str = "YAHOO";

const DEFAULT_QUERY_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Configuration
// ============================================================================

/// Endpoints and client identity used by [`YahooProvider`].
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Base URL for the query API (quote, chart, crumb)
    pub query_base_url: String,
    /// URL that hands out the session cookie
    pub cookie_url: String,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            query_base_url: DEFAULT_QUERY_BASE_URL.to_string(),
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl YahooConfig {
    /// Point both the query API and the cookie endpoint at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            cookie_url: format!("{}/cookie", base_url),
            query_base_url: base_url,
            ..Default::default()
        }
    }
}

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance quote provider.
///
/// Holds its own HTTP client and crumb cache; construct one and share it
/// behind an `Arc`.
pub struct YahooProvider {
    client: reqwest::Client,
    config: YahooConfig,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooProvider {
    /// Create a provider against the public Yahoo endpoints.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(YahooConfig::default())
    }

    pub fn with_config(config: YahooConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            config,
            crumb: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &YahooConfig {
        &self.config
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Return the cached crumb, fetching a new one if needed.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let cached = self.crumb.read().ok().and_then(|guard| guard.clone());
        if let Some(crumb) = cached {
            return Ok(crumb);
        }
        self.fetch_crumb().await
    }

    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // The cookie endpoint answers 404 but still sets the session cookie
        let response = self
            .client
            .get(&self.config.cookie_url)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e))
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(';').next())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie"))?;

        let response = self
            .client
            .get(format!("{}/v1/test/getcrumb", self.config.query_base_url))
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to get crumb: HTTP {}", response.status()),
            ));
        }

        let crumb = response.text().await.map_err(|e| {
            MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e))
        })?;
        let crumb = crumb.trim().to_string();
        if crumb.is_empty() {
            return Err(MarketDataError::provider(PROVIDER_ID, "Yahoo returned an empty crumb"));
        }

        let crumb_data = CrumbData { cookie, crumb };
        if let Ok(mut guard) = self.crumb.write() {
            *guard = Some(crumb_data.clone());
        }
        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = self.crumb.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Response Handling
    // ========================================================================

    /// Build an error for a non-success response, preferring the error
    /// object Yahoo embeds in the body.
    fn error_from_response(status: StatusCode, body: &str) -> MarketDataError {
        let embedded = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value.as_object().and_then(|root| {
                    root.values()
                        .filter_map(|section| section.get("error"))
                        .find(|error| !error.is_null())
                        .cloned()
                })
            })
            .and_then(|error| serde_json::from_value::<models::YahooApiError>(error).ok());

        match embedded {
            Some(error) => MarketDataError::provider(PROVIDER_ID, error.message()),
            None => MarketDataError::provider(PROVIDER_ID, format!("HTTP {}", status)),
        }
    }

    /// Zip Yahoo's columnar chart arrays into ordered rows, keeping nulls.
    fn to_raw_history(result: YahooChartResult) -> RawHistory {
        let Some(timestamps) = result.timestamp else {
            return RawHistory::new(Vec::new());
        };
        let columns = result.indicators.quote.into_iter().next().unwrap_or_default();

        let points = timestamps
            .iter()
            .enumerate()
            .filter_map(|(index, ts)| {
                let Some(date) = Utc.timestamp_opt(*ts, 0).single() else {
                    warn!("Skipping chart point with invalid timestamp {}", ts);
                    return None;
                };
                Some(RawHistoryPoint {
                    date,
                    close: value_at(&columns.close, index),
                    open: value_at(&columns.open, index),
                    high: value_at(&columns.high, index),
                    low: value_at(&columns.low, index),
                    volume: value_at(&columns.volume, index),
                })
            })
            .collect();

        RawHistory::new(points)
    }
}

fn value_at(column: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
    column
        .as_ref()
        .and_then(|values| values.get(index).copied().flatten())
}

// ============================================================================
// QuoteProvider Implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn quote(&self, symbol: &str) -> Result<Option<RawQuote>, MarketDataError> {
        debug!("Fetching quote for {} from Yahoo", symbol);

        let crumb = self.ensure_crumb().await?;
        let url = format!(
            "{}/v7/finance/quote?symbols={}&crumb={}",
            self.config.query_base_url,
            encode(symbol),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::error_from_response(status, &body));
        }

        let data: YahooQuoteResponse = serde_json::from_str(&body).map_err(|e| {
            MarketDataError::InvalidResponse(format!("Failed to parse quote response: {}", e))
        })?;

        if let Some(error) = data.quote_response.error {
            return Err(MarketDataError::provider(PROVIDER_ID, error.message()));
        }

        let quote = data.quote_response.result.into_iter().next();
        if quote.is_none() {
            debug!("Yahoo returned no quote for {}", symbol);
        }
        Ok(quote)
    }

    async fn chart(
        &self,
        symbol: &str,
        options: &ChartOptions,
    ) -> Result<Option<RawHistory>, MarketDataError> {
        let period2 = options.period2.unwrap_or_else(Utc::now);

        debug!(
            "Fetching {} chart for {} from {} to {} from Yahoo",
            options.interval,
            symbol,
            options.period1.format("%Y-%m-%d"),
            period2.format("%Y-%m-%d")
        );

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval={}",
            self.config.query_base_url,
            encode(symbol),
            options.period1.timestamp(),
            period2.timestamp(),
            options.interval
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::error_from_response(status, &body));
        }

        let data: YahooChartResponse = serde_json::from_str(&body).map_err(|e| {
            MarketDataError::InvalidResponse(format!("Failed to parse chart response: {}", e))
        })?;

        if let Some(error) = data.chart.error {
            return Err(MarketDataError::provider(PROVIDER_ID, error.message()));
        }

        Ok(data
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(Self::to_raw_history))
    }
}

// ============================================================================
// Tests
// ============================================================================
