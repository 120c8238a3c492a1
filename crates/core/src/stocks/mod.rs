//! Stocks module - domain models, normalization, and the fetch service.
//!
//! ```text
//! StockService ──join──▶ QuoteProvider::quote ─┐
//!              └───────▶ QuoteProvider::chart ─┴─▶ normalizer ─▶ StockRecord
//! ```

mod stocks_constants;
mod stocks_model;
mod stocks_normalizer;
mod stocks_service;
mod stocks_traits;

#[cfg(test)]
mod stocks_service_tests;

// Re-export the public interface
pub use stocks_constants::*;
pub use stocks_model::{HistoryPoint, StockRecord};
pub use stocks_normalizer::{normalize, to_history, to_stock_record};
pub use stocks_service::{history_window, StockService};
pub use stocks_traits::StockServiceTrait;
