//! Quote provider trait definitions.
//!
//! This module defines the `QuoteProvider` capability that the stock
//! service depends on. Implementations are injected, never looked up
//! globally, so tests can substitute a deterministic provider.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ChartOptions, RawHistory, RawQuote};

/// Capability for fetching raw quote and history data.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use market_tracker_market_data::{ChartOptions, MarketDataError, QuoteProvider, RawHistory, RawQuote};
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl QuoteProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn quote(&self, symbol: &str) -> Result<Option<RawQuote>, MarketDataError> {
///         Ok(Some(RawQuote::new(symbol)))
///     }
///
///     async fn chart(
///         &self,
///         _symbol: &str,
///         _options: &ChartOptions,
///     ) -> Result<Option<RawHistory>, MarketDataError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the provider answered but has no quote for the
    /// symbol, `Ok(Some(_))` with the raw quote otherwise.
    async fn quote(&self, symbol: &str) -> Result<Option<RawQuote>, MarketDataError>;

    /// Fetch chart (history) data for a symbol.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the provider answered without a chart result.
    /// Points are ordered by date ascending and may carry missing prices.
    async fn chart(
        &self,
        symbol: &str,
        options: &ChartOptions,
    ) -> Result<Option<RawHistory>, MarketDataError>;
}
