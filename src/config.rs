//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Only `RIOT_API_KEY` is required;
//! everything else falls back to a default.

use std::net::SocketAddr;

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `RIOT_API_KEY` was missing or empty.
    #[error("RIOT_API_KEY must be set and non-empty")]
    MissingApiKey,

    /// `SERVER_PORT` was set but is not a valid port number.
    #[error("invalid SERVER_PORT {value:?}: {source}")]
    InvalidPort {
        /// The raw environment value that failed to parse.
        value: String,
        /// Underlying parse failure.
        source: std::num::ParseIntError,
    },
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`] and never
/// mutated afterwards; components copy the fields they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Riot Games API key sent as `X-Riot-Token` on every upstream call.
    pub riot_api_key: String,

    /// Port the HTTP server binds to.
    pub server_port: u16,

    /// Per-request timeout in seconds for upstream calls.
    pub request_timeout_secs: u64,

    /// Maximum retries for transient upstream failures.
    pub max_retries: u32,

    /// Master switch for the in-memory response cache.
    pub cache_enabled: bool,

    /// Seconds a cached response stays valid.
    pub cache_ttl_secs: u64,

    /// Seconds between background sweeps of expired cache entries.
    pub cache_sweep_interval_secs: u64,

    /// Maximum concurrent match-detail fetches when building recent-match
    /// views.
    pub match_fetch_concurrency: usize,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when an optional variable is not
    /// set. Calls `dotenvy::dotenv().ok()` to optionally load a `.env`
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `RIOT_API_KEY` is unset
    /// or empty, and [`ConfigError::InvalidPort`] if `SERVER_PORT` is set
    /// but cannot be parsed as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let riot_api_key = std::env::var("RIOT_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => 8080,
        };

        let request_timeout_secs = parse_env("RIOT_REQUEST_TIMEOUT_SECS", 10);
        let max_retries = parse_env("RIOT_MAX_RETRIES", 2);

        let cache_enabled = parse_env_bool("CACHE_ENABLED", true);
        let cache_ttl_secs = parse_env("CACHE_TTL_SECS", 120);
        let cache_sweep_interval_secs = parse_env("CACHE_SWEEP_INTERVAL_SECS", 300);

        let match_fetch_concurrency = parse_env("MATCH_FETCH_CONCURRENCY", 4);

        Ok(Self {
            riot_api_key,
            server_port,
            request_timeout_secs,
            max_retries,
            cache_enabled,
            cache_ttl_secs,
            cache_sweep_interval_secs,
            match_fetch_concurrency,
        })
    }

    /// Returns the bind address in `:<port>` form (no host part).
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!(":{}", self.server_port)
    }

    /// Returns the socket address the listener actually binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.server_port))
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}
