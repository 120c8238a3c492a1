//! Stock fetch orchestration over an injected quote provider.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::{debug, error};

use market_tracker_market_data::{ChartOptions, MarketDataError, QuoteProvider};

use super::stocks_constants::{HISTORY_LOOKBACK_DAYS, NOT_FOUND_MARKERS, SYMBOL_REQUIRED_MESSAGE};
use super::stocks_model::StockRecord;
use super::stocks_normalizer::normalize;
use super::stocks_traits::StockServiceTrait;
use crate::errors::{Error, Result};

/// Daily chart window ending now: `period1 = now - 30 days`, no `period2`.
pub fn history_window(now: DateTime<Utc>) -> ChartOptions {
    ChartOptions::daily_since(now - Duration::days(HISTORY_LOOKBACK_DAYS))
}

/// Service that fetches quote and history concurrently and normalizes them.
pub struct StockService {
    provider: Arc<dyn QuoteProvider>,
}

impl StockService {
    /// Creates a new StockService instance
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Turn a provider failure into the core taxonomy.
    fn classify(symbol: &str, err: &MarketDataError) -> Error {
        let message = err.to_string();
        if err.is_not_found() || NOT_FOUND_MARKERS.iter().any(|m| message.contains(m)) {
            Error::NotFound(format!("Symbol '{}' not found.", symbol))
        } else {
            Error::ProviderError(message)
        }
    }

    fn fail(symbol: &str, message: &str, err: Error) -> Error {
        error!("StockService Error [{}]: {}", symbol, message);
        err
    }
}

#[async_trait::async_trait]
impl StockServiceTrait for StockService {
    async fn fetch_stock_data(&self, symbol: &str) -> Result<StockRecord> {
        if symbol.is_empty() {
            return Err(Error::InvalidInput(SYMBOL_REQUIRED_MESSAGE.to_string()));
        }

        let options = history_window(Utc::now());
        debug!(
            "Fetching {} via {} (history since {})",
            symbol,
            self.provider.id(),
            options.period1.format("%Y-%m-%d")
        );

        // Both calls are in flight before either is awaited; a failure in
        // one still waits for the other to settle.
        let (quote, history) = futures::join!(
            self.provider.quote(symbol),
            self.provider.chart(symbol, &options)
        );

        let quote = match quote {
            Ok(Some(quote)) => quote,
            Ok(None) => {
                let message = format!("Stock not found: {}", symbol);
                return Err(Self::fail(symbol, &message, Error::NotFound(message.clone())));
            }
            Err(e) => {
                return Err(Self::fail(symbol, &e.to_string(), Self::classify(symbol, &e)));
            }
        };

        let history = match history {
            Ok(history) => history,
            Err(e) => {
                return Err(Self::fail(symbol, &e.to_string(), Self::classify(symbol, &e)));
            }
        };

        Ok(normalize(&quote, history.as_ref()))
    }
}
