//! Raw provider models
//!
//! These are the untrusted shapes a provider hands back before any
//! normalization:
//! - `quote` - Latest quote snapshot (RawQuote)
//! - `history` - Daily history points (RawHistory, RawHistoryPoint)
//! - `chart` - Chart request parameters (ChartOptions, Interval)

mod chart;
mod history;
mod quote;

pub use chart::{ChartOptions, Interval};
pub use history::{RawHistory, RawHistoryPoint};
pub use quote::RawQuote;
