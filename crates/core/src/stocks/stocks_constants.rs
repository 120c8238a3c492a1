/// Number of days of daily history fetched alongside the quote
pub const HISTORY_LOOKBACK_DAYS: i64 = 30;

/// Message returned when the symbol is empty
pub const SYMBOL_REQUIRED_MESSAGE: &str = "Stock symbol is required";

/// Substrings in a provider error message that mean "symbol does not exist"
pub const NOT_FOUND_MARKERS: [&str; 2] = ["Not Found", "404"];
