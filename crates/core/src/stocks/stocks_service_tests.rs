//! Tests for StockService fetch orchestration.
//!
//! # Contract Points
//!
//! 1. Empty symbols are rejected before the provider is touched
//! 2. Quote and chart run concurrently and are both awaited
//! 3. An empty quote is `NotFound` regardless of the chart outcome
//! 4. Provider failures are classified as `NotFound` or `ProviderError`
//! 5. A missing chart degrades to an empty history

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, OnceLock};
    use std::time::Duration as StdDuration;

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use log::{Level, Log, Metadata, Record};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tokio::sync::Barrier;

    use market_tracker_market_data::{
        ChartOptions, Interval, MarketDataError, QuoteProvider, RawHistory, RawHistoryPoint,
        RawQuote,
    };

    use crate::errors::Error;
    use crate::stocks::{history_window, StockService, StockServiceTrait};

    // =========================================================================
    // Mock QuoteProvider
    // =========================================================================

    /// Outcome a mock call resolves to. Errors are rebuilt on every call
    /// because `MarketDataError` is not `Clone`.
    enum Outcome<T> {
        Value(Option<T>),
        Fail(String),
        NotFound,
    }

    impl<T: Clone> Outcome<T> {
        fn resolve(&self) -> Result<Option<T>, MarketDataError> {
            match self {
                Outcome::Value(value) => Ok(value.clone()),
                Outcome::Fail(message) => Err(MarketDataError::provider("MOCK", message.clone())),
                Outcome::NotFound => Err(MarketDataError::SymbolNotFound("MOCK".to_string())),
            }
        }
    }

    struct MockQuoteProvider {
        quote: Outcome<RawQuote>,
        chart: Outcome<RawHistory>,
        quote_calls: AtomicUsize,
        chart_calls: AtomicUsize,
        last_chart_options: Mutex<Option<ChartOptions>>,
    }

    impl MockQuoteProvider {
        fn new(quote: Outcome<RawQuote>, chart: Outcome<RawHistory>) -> Self {
            Self {
                quote,
                chart,
                quote_calls: AtomicUsize::new(0),
                chart_calls: AtomicUsize::new(0),
                last_chart_options: Mutex::new(None),
            }
        }

        fn calls(&self) -> (usize, usize) {
            (
                self.quote_calls.load(Ordering::SeqCst),
                self.chart_calls.load(Ordering::SeqCst),
            )
        }
    }

    #[async_trait]
    impl QuoteProvider for MockQuoteProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn quote(&self, _symbol: &str) -> Result<Option<RawQuote>, MarketDataError> {
            self.quote_calls.fetch_add(1, Ordering::SeqCst);
            self.quote.resolve()
        }

        async fn chart(
            &self,
            _symbol: &str,
            options: &ChartOptions,
        ) -> Result<Option<RawHistory>, MarketDataError> {
            self.chart_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_chart_options.lock().unwrap() = Some(options.clone());
            self.chart.resolve()
        }
    }

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn mock_quote() -> RawQuote {
        RawQuote {
            symbol: "AAPL".to_string(),
            long_name: Some("Apple Inc.".to_string()),
            regular_market_price: Some(150.0),
            regular_market_change: Some(2.5),
            regular_market_change_percent: Some(1.69),
            regular_market_previous_close: Some(147.5),
            regular_market_open: Some(148.0),
            regular_market_day_high: Some(151.0),
            regular_market_day_low: Some(147.0),
            regular_market_volume: Some(50_000_000.0),
            market_cap: Some(2_500_000_000_000.0),
            ..Default::default()
        }
    }

    fn mock_history() -> RawHistory {
        let day = |d| Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap();
        RawHistory::new(vec![
            RawHistoryPoint::ohlc(day(1), 139.0, 141.0, 138.0, 140.0),
            RawHistoryPoint::ohlc(day(2), 140.0, 143.0, 139.0, 142.0),
            RawHistoryPoint::empty(day(3)),
        ])
    }

    fn service_with(provider: Arc<MockQuoteProvider>) -> StockService {
        StockService::new(provider)
    }

    // =========================================================================
    // Success paths
    // =========================================================================

    #[tokio::test]
    async fn test_fetch_and_format_stock_data() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(Some(mock_history())),
        ));
        let service = service_with(provider.clone());

        let record = service.fetch_stock_data("AAPL").await.unwrap();

        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.name, "Apple Inc.");
        assert_eq!(record.price, dec!(150.00));
        assert_eq!(record.change, dec!(2.5));
        assert_eq!(record.volume, dec!(50000000));
        assert_eq!(record.market_cap, Some(dec!(2500000000000)));
        assert_eq!(record.history.len(), 2);
        assert_eq!(record.history[0].close, dec!(140));
        assert_eq!(record.history[1].close, dec!(142));
        assert_eq!(provider.calls(), (1, 1));
    }

    #[tokio::test]
    async fn test_symbol_comes_from_provider() {
        let mut quote = mock_quote();
        quote.symbol = "BRK-B".to_string();
        quote.long_name = None;
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(quote)),
            Outcome::Value(None),
        ));

        let record = service_with(provider).fetch_stock_data("brk.b").await.unwrap();

        assert_eq!(record.symbol, "BRK-B");
        assert_eq!(record.name, "BRK-B");
    }

    #[tokio::test]
    async fn test_missing_history_is_empty() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(None),
        ));

        let record = service_with(provider).fetch_stock_data("AAPL").await.unwrap();
        assert!(record.history.is_empty());
    }

    #[tokio::test]
    async fn test_history_without_points_is_empty() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(Some(RawHistory::default())),
        ));

        let record = service_with(provider).fetch_stock_data("AAPL").await.unwrap();
        assert!(record.history.is_empty());
    }

    #[tokio::test]
    async fn test_sparse_quote_defaults_to_zero() {
        let quote = RawQuote {
            symbol: "^GSPC".to_string(),
            short_name: Some("S&P 500".to_string()),
            regular_market_price: Some(4500.25),
            regular_market_change: Some(0.0),
            ..Default::default()
        };
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(quote)),
            Outcome::Value(None),
        ));

        let record = service_with(provider).fetch_stock_data("^GSPC").await.unwrap();

        assert_eq!(record.name, "S&P 500");
        assert_eq!(record.price, dec!(4500.25));
        assert_eq!(record.change, Decimal::ZERO);
        assert_eq!(record.volume, Decimal::ZERO);
        assert_eq!(record.market_cap, None);
    }

    #[tokio::test]
    async fn test_same_data_yields_equal_records() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(Some(mock_history())),
        ));
        let service = service_with(provider);

        let first = service.fetch_stock_data("AAPL").await.unwrap();
        let second = service.fetch_stock_data("AAPL").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_chart_requests_thirty_days_of_daily_bars() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(None),
        ));
        let service = service_with(provider.clone());

        let before = Utc::now();
        service.fetch_stock_data("AAPL").await.unwrap();
        let after = Utc::now();

        let options = provider.last_chart_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.interval, Interval::OneDay);
        assert_eq!(options.period2, None);
        assert!(options.period1 >= before - Duration::days(30));
        assert!(options.period1 <= after - Duration::days(30));
    }

    #[test]
    fn test_history_window() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let options = history_window(now);
        assert_eq!(
            options.period1,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(options.period2, None);
        assert_eq!(options.interval, Interval::OneDay);
    }

    // =========================================================================
    // Failure paths
    // =========================================================================

    #[tokio::test]
    async fn test_empty_symbol_is_rejected_before_provider_call() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(None),
        ));
        let service = service_with(provider.clone());

        let err = service.fetch_stock_data("").await.unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("symbol is required"));
        assert_eq!(provider.calls(), (0, 0));
    }

    #[tokio::test]
    async fn test_empty_quote_is_not_found() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(None),
            Outcome::Value(Some(RawHistory::default())),
        ));

        let err = service_with(provider)
            .fetch_stock_data("INVALID")
            .await
            .unwrap_err();

        assert_eq!(err, Error::NotFound("Stock not found: INVALID".to_string()));
    }

    #[tokio::test]
    async fn test_empty_quote_wins_over_chart_failure() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(None),
            Outcome::Fail("Network Error".to_string()),
        ));

        let err = service_with(provider)
            .fetch_stock_data("INVALID")
            .await
            .unwrap_err();

        assert_eq!(err, Error::NotFound("Stock not found: INVALID".to_string()));
    }

    #[tokio::test]
    async fn test_not_found_message_is_replaced_with_friendly_message() {
        for message in ["Not Found", "Request failed with status 404"] {
            let provider = Arc::new(MockQuoteProvider::new(
                Outcome::Fail(message.to_string()),
                Outcome::Value(None),
            ));

            let err = service_with(provider).fetch_stock_data("XYZ").await.unwrap_err();

            assert_eq!(err, Error::NotFound("Symbol 'XYZ' not found.".to_string()));
        }
    }

    #[tokio::test]
    async fn test_typed_symbol_not_found_is_not_found() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::NotFound,
            Outcome::Value(None),
        ));

        let err = service_with(provider).fetch_stock_data("XYZ").await.unwrap_err();
        assert_eq!(err, Error::NotFound("Symbol 'XYZ' not found.".to_string()));
    }

    #[tokio::test]
    async fn test_other_quote_errors_are_passed_through_verbatim() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Fail("Network Error".to_string()),
            Outcome::Value(Some(mock_history())),
        ));

        let err = service_with(provider).fetch_stock_data("AAPL").await.unwrap_err();

        assert_eq!(err, Error::ProviderError("Network Error".to_string()));
        assert_eq!(err.to_string(), "Network Error");
    }

    #[tokio::test]
    async fn test_chart_failure_fails_the_request() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Fail("Internal Server Error".to_string()),
        ));

        let err = service_with(provider).fetch_stock_data("AAPL").await.unwrap_err();
        assert_eq!(err, Error::ProviderError("Internal Server Error".to_string()));
    }

    #[tokio::test]
    async fn test_chart_not_found_is_classified() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Fail("Not Found: No data found, symbol may be delisted".to_string()),
        ));

        let err = service_with(provider).fetch_stock_data("OLD").await.unwrap_err();
        assert_eq!(err, Error::NotFound("Symbol 'OLD' not found.".to_string()));
    }

    #[tokio::test]
    async fn test_quote_error_takes_priority_over_chart_error() {
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Fail("quote down".to_string()),
            Outcome::Fail("chart down".to_string()),
        ));

        let err = service_with(provider).fetch_stock_data("AAPL").await.unwrap_err();
        assert_eq!(err, Error::ProviderError("quote down".to_string()));
    }

    // =========================================================================
    // Concurrency
    // =========================================================================

    /// Provider whose calls each wait on a shared two-party barrier, so the
    /// fetch can only finish if both calls are in flight at the same time.
    struct RendezvousProvider {
        barrier: Barrier,
    }

    #[async_trait]
    impl QuoteProvider for RendezvousProvider {
        fn id(&self) -> &'static str {
            "RENDEZVOUS"
        }

        async fn quote(&self, symbol: &str) -> Result<Option<RawQuote>, MarketDataError> {
            self.barrier.wait().await;
            Ok(Some(RawQuote::new(symbol)))
        }

        async fn chart(
            &self,
            _symbol: &str,
            _options: &ChartOptions,
        ) -> Result<Option<RawHistory>, MarketDataError> {
            self.barrier.wait().await;
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_quote_and_chart_are_in_flight_together() {
        let service = StockService::new(Arc::new(RendezvousProvider {
            barrier: Barrier::new(2),
        }));

        let record = tokio::time::timeout(
            StdDuration::from_secs(5),
            service.fetch_stock_data("MSFT"),
        )
        .await
        .expect("quote and chart were not issued concurrently")
        .unwrap();

        assert_eq!(record.symbol, "MSFT");
    }

    /// Provider whose quote fails immediately while the chart settles later.
    struct SlowChartProvider {
        chart_settled: AtomicBool,
    }

    #[async_trait]
    impl QuoteProvider for SlowChartProvider {
        fn id(&self) -> &'static str {
            "SLOW_CHART"
        }

        async fn quote(&self, _symbol: &str) -> Result<Option<RawQuote>, MarketDataError> {
            Err(MarketDataError::provider("SLOW_CHART", "Network Error"))
        }

        async fn chart(
            &self,
            _symbol: &str,
            _options: &ChartOptions,
        ) -> Result<Option<RawHistory>, MarketDataError> {
            tokio::time::sleep(StdDuration::from_millis(20)).await;
            self.chart_settled.store(true, Ordering::SeqCst);
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_failure_waits_for_the_other_call_to_settle() {
        let provider = Arc::new(SlowChartProvider {
            chart_settled: AtomicBool::new(false),
        });
        let service = StockService::new(provider.clone());

        let err = service.fetch_stock_data("AAPL").await.unwrap_err();

        assert_eq!(err, Error::ProviderError("Network Error".to_string()));
        assert!(provider.chart_settled.load(Ordering::SeqCst));
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Process-wide logger that keeps every record for later inspection.
    /// Tests share it, so assertions filter by a symbol unique to the test.
    struct CapturingLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    fn capturing_logger() -> &'static CapturingLogger {
        static LOGGER: OnceLock<CapturingLogger> = OnceLock::new();
        let logger = LOGGER.get_or_init(|| CapturingLogger {
            records: Mutex::new(Vec::new()),
        });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
        logger
    }

    fn logged(logger: &CapturingLogger, needle: &str) -> Vec<(Level, String)> {
        logger
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .cloned()
            .collect()
    }

    #[tokio::test]
    async fn test_provider_failure_logs_one_error_line() {
        let logger = capturing_logger();
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Fail("Network Error".to_string()),
            Outcome::Value(Some(mock_history())),
        ));

        service_with(provider)
            .fetch_stock_data("LOGQ")
            .await
            .unwrap_err();

        assert_eq!(
            logged(logger, "StockService Error [LOGQ]"),
            vec![(Level::Error, "StockService Error [LOGQ]: Network Error".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_quote_logs_not_found_message() {
        let logger = capturing_logger();
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(None),
            Outcome::Value(None),
        ));

        service_with(provider)
            .fetch_stock_data("LOGNF")
            .await
            .unwrap_err();

        assert_eq!(
            logged(logger, "StockService Error [LOGNF]"),
            vec![(
                Level::Error,
                "StockService Error [LOGNF]: Stock not found: LOGNF".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_invalid_input_is_not_logged() {
        let logger = capturing_logger();
        let provider = Arc::new(MockQuoteProvider::new(
            Outcome::Value(Some(mock_quote())),
            Outcome::Value(None),
        ));

        let err = service_with(provider).fetch_stock_data("").await.unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(logged(logger, "StockService Error []").is_empty());
    }
}
