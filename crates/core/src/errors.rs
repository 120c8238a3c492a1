//! Core error types for the Market Tracker application.
//!
//! Every failure the stock service can produce collapses into one of three
//! kinds. Each variant displays only its message so the display boundary can
//! surface it to the user as-is.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for stock data operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller supplied unusable input (e.g., an empty symbol).
    #[error("{0}")]
    InvalidInput(String),

    /// The symbol does not exist upstream.
    #[error("{0}")]
    NotFound(String),

    /// Any other provider failure; carries the provider's message verbatim.
    #[error("{0}")]
    ProviderError(String),
}

impl Error {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "InvalidInput",
            Error::NotFound(_) => "NotFound",
            Error::ProviderError(_) => "ProviderError",
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
