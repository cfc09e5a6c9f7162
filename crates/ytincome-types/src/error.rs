//! Error types for ytincome.

use thiserror::Error;

/// Result type alias for ytincome operations.
pub type Result<T> = std::result::Result<T, YtIncomeError>;

/// Errors that can occur while looking up a channel and estimating its income.
#[derive(Error, Debug)]
pub enum YtIncomeError {
    /// The channel id, username or handle matched no upstream channel.
    #[error("Channel not found: {0}")]
    NotFound(String),

    /// The upstream API failed or answered with an unexpected shape.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The search input could not be interpreted as a channel query.
    #[error(transparent)]
    InvalidQuery(#[from] QueryParseError),

    /// A custom rate model was out of range.
    #[error(transparent)]
    InvalidRate(#[from] RateModelError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YtIncomeError {
    /// Returns true if the error means the channel does not exist upstream.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error for rate models outside their valid domain.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RateModelError {
    /// CPM must be a finite positive number.
    #[error("Invalid CPM: {0} (expected a positive amount)")]
    InvalidCostPerThousandViews(f64),

    /// Monetized view share must lie in `[0, 1]`.
    #[error("Invalid monetized view share: {0} (expected a value between 0 and 1)")]
    InvalidMonetizedViewShare(f64),
}

/// Error for search input that cannot name a channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    /// The input was empty or whitespace only.
    #[error("Empty channel query")]
    Empty,

    /// The input was a bare `@` with no handle after it.
    #[error("Empty handle: {0:?}")]
    EmptyHandle(String),
}
