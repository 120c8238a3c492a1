use std::sync::Arc;

use crate::config::{Config, LogFormat};
use market_tracker_core::stocks::{StockService, StockServiceTrait};
use market_tracker_market_data::{QuoteProvider, YahooConfig, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub stock_service: Arc<dyn StockServiceTrait + Send + Sync>,
}

impl AppState {
    /// State backed by the given provider.
    pub fn with_provider(provider: Arc<dyn QuoteProvider>) -> Self {
        Self {
            stock_service: Arc::new(StockService::new(provider)),
        }
    }
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = match &config.yahoo_base_url {
        Some(base_url) => {
            YahooProvider::with_config(YahooConfig::with_base_url(base_url.as_str()))?
        }
        None => YahooProvider::new()?,
    };
    tracing::info!(
        "Quote provider initialized: {} ({})",
        provider.id(),
        provider.config().query_base_url
    );
    Ok(Arc::new(AppState::with_provider(Arc::new(provider))))
}
