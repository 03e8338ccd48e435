//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the HTTP layer. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response. Upstream client failures ([`RiotError`]) fold into it via
//! `From`, with the contextual 404 variants applied by the data service
//! before the generic conversion runs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::riot::RiotError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "unknown platform: xx9",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ServiceError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category           | HTTP Status                |
/// |-----------|--------------------|----------------------------|
/// | 1000–1999 | Validation         | 400 Bad Request            |
/// | 2000–2999 | Not Found          | 404 Not Found              |
/// | 3000–3999 | Server / Upstream  | 500 / 502                  |
/// | 429       | Upstream rate limit| 429 Too Many Requests      |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The region path segment is not a known platform.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No summoner exists for the given Riot ID or PUUID.
    #[error("summoner not found: {0}")]
    SummonerNotFound(String),

    /// No match exists for the given match ID.
    #[error("match not found: {0}")]
    MatchNotFound(String),

    /// The upstream returned 404 for a route with no more specific
    /// mapping.
    #[error("resource not found upstream: {0}")]
    UpstreamNotFound(String),

    /// The upstream applied rate limiting; surfaced to the client.
    #[error("rate limited by upstream; retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the client may retry.
        retry_after_secs: u64,
    },

    /// Transport or protocol failure talking to the Riot API.
    #[error("upstream error: {0}")]
    Upstream(RiotError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::UnknownPlatform(_) => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::SummonerNotFound(_) => 2001,
            Self::MatchNotFound(_) => 2002,
            Self::UpstreamNotFound(_) => 2003,
            Self::RateLimited { .. } => 429,
            Self::Upstream(_) => 3002,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownPlatform(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::SummonerNotFound(_) | Self::MatchNotFound(_) | Self::UpstreamNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RiotError> for ServiceError {
    fn from(err: RiotError) -> Self {
        match err {
            RiotError::RateLimited { retry_after_secs } => Self::RateLimited { retry_after_secs },
            RiotError::NotFound { route } => Self::UpstreamNotFound(route),
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let retry_after = match &self {
            Self::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        if let Some(secs) = retry_after
            && let Ok(value) = axum::http::HeaderValue::from_str(&secs.to_string())
        {
            response.headers_mut().insert("Retry-After", value);
        }
        response
    }
}
