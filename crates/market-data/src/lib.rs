//! Market Tracker Market Data Crate
//!
//! This crate is the provider gateway for the Market Tracker application:
//! it fetches raw, untrusted quote and history data from a third-party
//! financial data source.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  Stock Service   |  (market-tracker-core)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  QuoteProvider   |  (injected capability)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------------+
//! |  YahooProvider   | --> | RawQuote / RawHistory  |
//! +------------------+     +------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteProvider`] - `quote` + `chart` capability
//! - [`RawQuote`] - Latest quote snapshot, every market field optional
//! - [`RawHistory`] - Daily points, closes may be missing
//! - [`ChartOptions`] - Chart range and interval
//! - [`MarketDataError`] - Provider failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{ChartOptions, Interval, RawHistory, RawHistoryPoint, RawQuote};
pub use provider::yahoo::{YahooConfig, YahooProvider};
pub use provider::QuoteProvider;
