//! Authenticated HTTP client for the Riot Games API.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, trace, warn};
use url::Url;

use super::error::{Result, RiotError};
use super::types::{AccountDto, LeagueEntryDto, MatchDto, SummonerDto};
use crate::domain::{Platform, RegionalRoute};

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default maximum retries for transient failures.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Initial backoff in milliseconds.
const INITIAL_BACKOFF_MS: u64 = 100;

/// Maximum backoff in milliseconds.
const MAX_BACKOFF_MS: u64 = 5_000;

/// Backoff multiplier applied per attempt.
const BACKOFF_MULTIPLIER: f64 = 2.0;

/// Jitter factor (fraction of the backoff added or subtracted).
const JITTER_FACTOR: f64 = 0.1;

/// Authentication header the Riot API expects on every call.
const API_KEY_HEADER: &str = "X-Riot-Token";

/// HTTP client for the Riot Games API.
///
/// Sends the API key as `X-Riot-Token` on every request, builds
/// per-shard URLs (`https://{platform}.api.riotgames.com` or
/// `https://{route}.api.riotgames.com`), and retries transient failures
/// (connect/timeout errors, 5xx, 429) with exponential backoff and
/// jitter. A 429 with a `Retry-After` header sleeps for the advertised
/// duration instead of the computed backoff.
///
/// Construction performs no network I/O.
#[derive(Clone)]
pub struct RiotClient {
    client: Client,
    api_key: String,
    api_base: Option<Url>,
    request_timeout: Duration,
    max_retries: u32,
}

impl fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotClient")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl RiotClient {
    /// Creates a client authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::MissingApiKey`] if the key is empty, or
    /// [`RiotError::Http`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(api_key: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(RiotError::MissingApiKey);
        }
        let client = Client::builder().timeout(DEFAULT_REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.trim().to_string(),
            api_base: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Sets the per-request timeout, rebuilding the underlying client.
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::Http`] if the HTTP client cannot be rebuilt.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        self.request_timeout = timeout;
        Ok(self)
    }

    /// Sets the maximum number of retries for transient failures.
    ///
    /// Only connect/timeout errors, 5xx, and 429 are retried; terminal
    /// statuses (404, 401/403) and decode errors are not.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Overrides the API base URL, pointing every shard at one host.
    ///
    /// Used in tests to route all calls at a mock server.
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::Url`] if `base` is not a valid URL.
    pub fn with_api_base(mut self, base: &str) -> Result<Self> {
        self.api_base = Some(Url::parse(base)?);
        Ok(self)
    }

    /// Fetches an account by Riot ID from account-v1.
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::NotFound`] if no account has that Riot ID,
    /// or any transport/status error.
    pub async fn account_by_riot_id(
        &self,
        route: RegionalRoute,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto> {
        let path = format!("/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}");
        let url = self.regional_url(route, &path)?;
        let response = self.execute_with_retry(url, &path).await?;
        Ok(response.json().await?)
    }

    /// Fetches a summoner by PUUID from summoner-v4.
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::NotFound`] if the PUUID is unknown on this
    /// platform, or any transport/status error.
    pub async fn summoner_by_puuid(&self, platform: Platform, puuid: &str) -> Result<SummonerDto> {
        let path = format!("/lol/summoner/v4/summoners/by-puuid/{puuid}");
        let url = self.platform_url(platform, &path)?;
        let response = self.execute_with_retry(url, &path).await?;
        Ok(response.json().await?)
    }

    /// Fetches ranked league entries by PUUID from league-v4.
    ///
    /// Returns an empty vector for unranked players.
    ///
    /// # Errors
    ///
    /// Returns a transport/status error on upstream failure.
    pub async fn league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>> {
        let path = format!("/lol/league/v4/entries/by-puuid/{puuid}");
        let url = self.platform_url(platform, &path)?;
        let response = self.execute_with_retry(url, &path).await?;
        Ok(response.json().await?)
    }

    /// Fetches a page of match IDs by PUUID from match-v5.
    ///
    /// # Errors
    ///
    /// Returns a transport/status error on upstream failure.
    pub async fn match_ids_by_puuid(
        &self,
        route: RegionalRoute,
        puuid: &str,
        start: u32,
        count: u32,
        queue: Option<i32>,
    ) -> Result<Vec<String>> {
        let path = format!("/lol/match/v5/matches/by-puuid/{puuid}/ids");
        let mut url = self.regional_url(route, &path)?;
        url.query_pairs_mut()
            .append_pair("start", &start.to_string())
            .append_pair("count", &count.to_string());
        if let Some(queue) = queue {
            url.query_pairs_mut()
                .append_pair("queue", &queue.to_string());
        }
        let response = self.execute_with_retry(url, &path).await?;
        Ok(response.json().await?)
    }

    /// Fetches a single match by ID from match-v5.
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::NotFound`] if the match does not exist, or
    /// any transport/status error.
    pub async fn match_by_id(&self, route: RegionalRoute, match_id: &str) -> Result<MatchDto> {
        let path = format!("/lol/match/v5/matches/{match_id}");
        let url = self.regional_url(route, &path)?;
        let response = self.execute_with_retry(url, &path).await?;
        Ok(response.json().await?)
    }

    /// Builds a URL on the platform shard (summoner-v4, league-v4).
    fn platform_url(&self, platform: Platform, path: &str) -> Result<Url> {
        match &self.api_base {
            Some(base) => Ok(base.join(path)?),
            None => Ok(Url::parse(&format!(
                "https://{platform}.api.riotgames.com{path}"
            ))?),
        }
    }

    /// Builds a URL on the continental shard (account-v1, match-v5).
    fn regional_url(&self, route: RegionalRoute, path: &str) -> Result<Url> {
        match &self.api_base {
            Some(base) => Ok(base.join(path)?),
            None => Ok(Url::parse(&format!(
                "https://{route}.api.riotgames.com{path}"
            ))?),
        }
    }

    /// Calculates the backoff duration for a retry attempt, with jitter.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn calculate_backoff(attempt: u32) -> Duration {
        let base = INITIAL_BACKOFF_MS as f64 * BACKOFF_MULTIPLIER.powi(attempt as i32);
        let capped = base.min(MAX_BACKOFF_MS as f64);

        let jitter_range = capped * JITTER_FACTOR;
        let jitter = rand::random::<f64>() * 2.0 * jitter_range - jitter_range;
        Duration::from_millis((capped + jitter).max(0.0) as u64)
    }

    /// Executes a GET with auth header, status mapping, and retries.
    async fn execute_with_retry(&self, url: Url, route: &str) -> Result<Response> {
        for attempt in 0..=self.max_retries {
            debug!(%url, attempt = attempt + 1, "riot api request");

            let result = self
                .client
                .get(url.clone())
                .header(API_KEY_HEADER, &self.api_key)
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status();
                    trace!(%status, route, "riot api response");

                    if status.is_success() {
                        return Ok(response);
                    }

                    match status {
                        StatusCode::NOT_FOUND => return Err(RiotError::not_found(route)),
                        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                            return Err(RiotError::InvalidApiKey {
                                status: status.as_u16(),
                            });
                        }
                        StatusCode::TOO_MANY_REQUESTS => {
                            let retry_after_secs = retry_after_secs(&response);
                            if attempt < self.max_retries {
                                let wait = match retry_after_secs {
                                    Some(secs) => Duration::from_secs(secs),
                                    None => Self::calculate_backoff(attempt),
                                };
                                warn!(route, ?wait, "rate limited, will retry");
                                sleep(wait).await;
                                continue;
                            }
                            return Err(RiotError::RateLimited {
                                retry_after_secs: retry_after_secs.unwrap_or(1),
                            });
                        }
                        s if s.is_server_error() => {
                            if attempt < self.max_retries {
                                let backoff = Self::calculate_backoff(attempt);
                                warn!(%status, route, ?backoff, "server error, will retry");
                                sleep(backoff).await;
                                continue;
                            }
                            return Err(RiotError::status(status.as_u16(), route));
                        }
                        _ => return Err(RiotError::status(status.as_u16(), route)),
                    }
                }
                Err(e) => {
                    let is_retryable = e.is_connect() || e.is_timeout() || e.is_request();
                    if is_retryable && attempt < self.max_retries {
                        let backoff = Self::calculate_backoff(attempt);
                        warn!(error = %e, route, ?backoff, "request failed, will retry");
                        sleep(backoff).await;
                        continue;
                    }
                    return Err(RiotError::Http(e));
                }
            }
        }

        Err(RiotError::retries_exhausted(route))
    }
}

/// Reads the `Retry-After` header as whole seconds, if present.
fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
