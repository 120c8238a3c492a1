//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
///
/// Display strings are kept close to what the provider reported so callers
/// can surface them without rewording.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider positively reported that the symbol does not exist.
    #[error("Not Found: {0}")]
    SymbolNotFound(String),

    /// A provider-specific error occurred.
    #[error("{message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider rejected our credentials (expired cookie/crumb).
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the request
        provider: String,
    },

    /// The provider answered with a body we could not interpret.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A network error occurred while communicating with a provider.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Shorthand for a `ProviderError` variant.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error means the symbol does not exist upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_displays_message_verbatim() {
        let error = MarketDataError::provider("YAHOO", "Network Error");
        assert_eq!(error.to_string(), "Network Error");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_symbol_not_found() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(error.to_string(), "Not Found: INVALID");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::Unauthorized {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(error.to_string(), "Unauthorized: YAHOO");

        let error = MarketDataError::InvalidResponse("missing chart".to_string());
        assert_eq!(error.to_string(), "Invalid response: missing chart");
    }
}
