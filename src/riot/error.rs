//! Error types for the Riot API client.

use thiserror::Error;

/// Errors produced by [`super::RiotClient`].
#[derive(Error, Debug)]
pub enum RiotError {
    /// Transport-level failure (connect, timeout, body read, decode).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be built.
    #[error("invalid riot api url: {0}")]
    Url(#[from] url::ParseError),

    /// The client was constructed without a usable API key.
    #[error("riot api key is missing or empty")]
    MissingApiKey,

    /// The upstream rejected our credentials (401/403).
    #[error("riot api rejected the api key (status {status})")]
    InvalidApiKey {
        /// HTTP status returned by the upstream.
        status: u16,
    },

    /// The requested resource does not exist upstream (404).
    #[error("resource not found upstream: {route}")]
    NotFound {
        /// Upstream route that produced the 404.
        route: String,
    },

    /// The upstream applied rate limiting (429).
    #[error("rate limited by the riot api; retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying, from the `Retry-After` header.
        retry_after_secs: u64,
    },

    /// Any other non-success status.
    #[error("unexpected riot api status {status} for {route}")]
    Status {
        /// HTTP status returned by the upstream.
        status: u16,
        /// Upstream route that produced the status.
        route: String,
    },

    /// Every retry attempt was consumed without a usable response.
    #[error("riot api retries exhausted for {route}")]
    RetriesExhausted {
        /// Upstream route that kept failing.
        route: String,
    },
}

// Helper methods for common error construction
impl RiotError {
    /// Create a not-found error for the given route.
    pub fn not_found(route: impl Into<String>) -> Self {
        Self::NotFound {
            route: route.into(),
        }
    }

    /// Create an unexpected-status error for the given route.
    pub fn status(status: u16, route: impl Into<String>) -> Self {
        Self::Status {
            status,
            route: route.into(),
        }
    }

    /// Create a retries-exhausted error for the given route.
    pub fn retries_exhausted(route: impl Into<String>) -> Self {
        Self::RetriesExhausted {
            route: route.into(),
        }
    }

    /// Returns `true` if this error is an upstream 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias used throughout the client module.
pub type Result<T> = std::result::Result<T, RiotError>;
