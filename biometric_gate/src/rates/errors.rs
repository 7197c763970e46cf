use std::fmt;

use thiserror::Error;

/// Errors that can occur while resolving a fiat rate.
#[derive(Debug, Error, Clone)]
pub enum RateError {
    /// The provider endpoint could not be reached or answered non-success.
    #[error("Could not update rate for {ticker}: {message}")]
    Network { ticker: String, message: String },

    /// The provider answered, but not with a usable rate.
    #[error("Rate data for {ticker} is wrong: {message}")]
    Malformed { ticker: String, message: String },

    /// The ticker is not in the fiat-unit registry, or the provider does
    /// not serve it.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

impl RateError {
    pub(crate) fn network(ticker: &str, message: impl fmt::Display) -> Self {
        Self::Network {
            ticker: ticker.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn malformed(ticker: &str, message: impl fmt::Display) -> Self {
        Self::Malformed {
            ticker: ticker.to_string(),
            message: message.to_string(),
        }
    }
}
