//! Mapping from raw provider shapes to the domain record.
//!
//! Pure functions; nothing here can fail. Missing numbers become zero,
//! missing names fall back to the symbol, and unusable history points are
//! dropped.

use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use market_tracker_market_data::{RawHistory, RawHistoryPoint, RawQuote};

use super::stocks_model::{HistoryPoint, StockRecord};

/// Map a raw quote and optional raw history into a complete record.
pub fn normalize(quote: &RawQuote, history: Option<&RawHistory>) -> StockRecord {
    StockRecord {
        history: to_history(history),
        ..to_stock_record(quote)
    }
}

/// Map a raw quote into a record with an empty history.
///
/// Zero, null, absent and NaN all collapse to `0` for every numeric field
/// except market cap, which is passed through untouched.
pub fn to_stock_record(quote: &RawQuote) -> StockRecord {
    StockRecord {
        symbol: quote.symbol.clone(),
        name: display_name(quote),
        price: or_zero(quote.regular_market_price),
        change: or_zero(quote.regular_market_change),
        change_percent: or_zero(quote.regular_market_change_percent),
        previous_close: or_zero(quote.regular_market_previous_close),
        open: or_zero(quote.regular_market_open),
        day_high: or_zero(quote.regular_market_day_high),
        day_low: or_zero(quote.regular_market_day_low),
        volume: or_zero(quote.regular_market_volume),
        market_cap: quote.market_cap.and_then(Decimal::from_f64),
        history: Vec::new(),
    }
}

/// Map raw history into chart points, keeping provider order.
///
/// Absent history, or history without a points collection, yields an empty
/// sequence. Points without a close are dropped.
pub fn to_history(history: Option<&RawHistory>) -> Vec<HistoryPoint> {
    let Some(points) = history.and_then(|h| h.quotes.as_deref()) else {
        return Vec::new();
    };

    points.iter().filter_map(to_history_point).collect()
}

fn to_history_point(point: &RawHistoryPoint) -> Option<HistoryPoint> {
    let close = point.close.and_then(Decimal::from_f64)?;
    Some(HistoryPoint {
        date: point.date,
        close,
        open: price_or_zero(point.open),
        high: price_or_zero(point.high),
        low: price_or_zero(point.low),
    })
}

/// Long name, then short name, then the symbol. Empty strings are skipped.
fn display_name(quote: &RawQuote) -> String {
    [quote.long_name.as_deref(), quote.short_name.as_deref()]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
        .unwrap_or(quote.symbol.as_str())
        .to_string()
}

fn or_zero(value: Option<f64>) -> Decimal {
    value
        .filter(|v| *v != 0.0)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

fn price_or_zero(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO)
}
