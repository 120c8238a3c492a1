//! Market Tracker Core - Domain entities, services, and traits.
//!
//! This crate turns raw provider data into the normalized stock record the
//! display layer renders. It knows nothing about transports; the provider
//! is injected as a `QuoteProvider` from the market-data crate.

pub mod errors;
pub mod stocks;

// Re-export the stock service surface
pub use stocks::{HistoryPoint, StockRecord, StockService, StockServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
