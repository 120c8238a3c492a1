use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("text") {
            Ok(LogFormat::Text)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            anyhow::bail!("Invalid MT_LOG_FORMAT: {}", value)
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub log_format: LogFormat,
    /// Overrides the Yahoo Finance endpoints (local stubs, proxies)
    pub yahoo_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("MT_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid MT_LISTEN_ADDR")?;
        let cors_allow = lookup("MT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let log_format = match lookup("MT_LOG_FORMAT") {
            Some(value) => value.trim().parse()?,
            None => LogFormat::default(),
        };
        let yahoo_base_url = lookup("MT_YAHOO_BASE_URL").filter(|s| !s.trim().is_empty());
        Ok(Self {
            listen_addr,
            cors_allow,
            log_format,
            yahoo_base_url,
        })
    }
}
