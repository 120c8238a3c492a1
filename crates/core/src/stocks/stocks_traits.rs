//! Stock service traits.

use async_trait::async_trait;

use super::stocks_model::StockRecord;
use crate::errors::Result;

/// Trait defining the contract for stock data operations.
///
/// This is the whole surface the core exposes to the display layer.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    /// Fetches the latest quote and recent daily history for `symbol`
    /// and returns them as one normalized record.
    ///
    /// Fails with `InvalidInput` for an empty symbol, `NotFound` when the
    /// symbol does not exist upstream, and `ProviderError` otherwise.
    async fn fetch_stock_data(&self, symbol: &str) -> Result<StockRecord>;
}
