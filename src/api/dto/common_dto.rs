//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Riot match-v5 allows at most this many match IDs per page.
const MAX_MATCH_IDS: u32 = 100;

/// At most this many full match summaries are composed per request.
const MAX_RECENT_MATCHES: u32 = 10;

/// Query parameters for the match-ID history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct MatchHistoryParams {
    /// Zero-based offset into the match history. Defaults to 0.
    #[serde(default)]
    pub start: u32,
    /// Number of match IDs to return (max 100). Defaults to 20.
    #[serde(default = "default_history_count")]
    pub count: u32,
    /// Optional numeric queue filter (e.g. 420 for ranked solo).
    #[serde(default)]
    pub queue: Option<i32>,
}

impl MatchHistoryParams {
    /// Clamps `count` to the range the upstream accepts.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            start: self.start,
            count: self.count.clamp(1, MAX_MATCH_IDS),
            queue: self.queue,
        }
    }
}

/// Query parameters for the recent-matches endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct RecentMatchesParams {
    /// Number of match summaries to compose (max 10). Defaults to 5.
    #[serde(default = "default_recent_count")]
    pub count: u32,
    /// Optional numeric queue filter (e.g. 420 for ranked solo).
    #[serde(default)]
    pub queue: Option<i32>,
}

impl RecentMatchesParams {
    /// Clamps `count` to the fan-out the service is willing to perform.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            count: self.count.clamp(1, MAX_RECENT_MATCHES),
            queue: self.queue,
        }
    }
}

fn default_history_count() -> u32 {
    20
}

fn default_recent_count() -> u32 {
    5
}
