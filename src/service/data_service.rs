//! Data service: orchestrates upstream calls into response views.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::dto::{
    LeagueEntryView, LeagueResponse, MatchHistoryParams, MatchIdsResponse, MatchSummary,
    RecentMatchesParams, RecentMatchesResponse, SummonerProfile,
};
use crate::domain::{Platform, ResponseCache};
use crate::error::ServiceError;
use crate::riot::RiotClient;

/// Orchestration layer between the HTTP handlers and the Riot client.
///
/// Stateless coordinator: owns a shared [`RiotClient`] for upstream
/// calls and an optional [`ResponseCache`] for composed views. Every
/// read method follows the pattern: check cache → call upstream → map
/// contextual errors → compose view → fill cache → return.
#[derive(Debug, Clone)]
pub struct DataService {
    client: Arc<RiotClient>,
    cache: Option<Arc<ResponseCache>>,
    match_fetch_concurrency: usize,
}

impl DataService {
    /// Creates a new `DataService`.
    ///
    /// `match_fetch_concurrency` bounds the fan-out when composing
    /// recent-match views; it is floored at one.
    #[must_use]
    pub fn new(
        client: Arc<RiotClient>,
        cache: Option<Arc<ResponseCache>>,
        match_fetch_concurrency: usize,
    ) -> Self {
        Self {
            client,
            cache,
            match_fetch_concurrency: match_fetch_concurrency.max(1),
        }
    }

    /// Returns a reference to the inner [`RiotClient`].
    #[must_use]
    pub fn client(&self) -> &Arc<RiotClient> {
        &self.client
    }

    /// Returns the response cache, if caching is enabled.
    #[must_use]
    pub fn cache(&self) -> Option<&Arc<ResponseCache>> {
        self.cache.as_ref()
    }

    /// Composes a summoner profile from account-v1, summoner-v4, and
    /// league-v4.
    ///
    /// The account lookup resolves the Riot ID to a PUUID; the summoner
    /// record and league entries are then fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::SummonerNotFound`] if the Riot ID or the
    /// resolved PUUID is unknown, or an upstream error.
    pub async fn summoner_profile(
        &self,
        platform: Platform,
        game_name: &str,
        tag_line: &str,
    ) -> Result<SummonerProfile, ServiceError> {
        let key = format!("profile:{platform}:{game_name}:{tag_line}");
        if let Some(hit) = self.cache_get::<SummonerProfile>(&key).await {
            return Ok(hit);
        }

        let riot_id = format!("{game_name}#{tag_line}");
        let account = self
            .client
            .account_by_riot_id(platform.regional_route(), game_name, tag_line)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::SummonerNotFound(riot_id.clone())
                } else {
                    e.into()
                }
            })?;

        let (summoner, entries) = tokio::try_join!(
            self.client.summoner_by_puuid(platform, &account.puuid),
            self.client.league_entries_by_puuid(platform, &account.puuid),
        )
        .map_err(|e| {
            if e.is_not_found() {
                ServiceError::SummonerNotFound(riot_id.clone())
            } else {
                e.into()
            }
        })?;

        let profile = SummonerProfile {
            puuid: account.puuid,
            game_name: account.game_name,
            tag_line: account.tag_line,
            platform: platform.to_string(),
            profile_icon_id: summoner.profile_icon_id,
            summoner_level: summoner.summoner_level,
            revision_date: chrono::DateTime::from_timestamp_millis(summoner.revision_date)
                .unwrap_or(chrono::DateTime::UNIX_EPOCH),
            league_entries: entries.into_iter().map(LeagueEntryView::from).collect(),
        };

        tracing::debug!(%platform, riot_id, "composed summoner profile");
        self.cache_put(key, &profile).await;
        Ok(profile)
    }

    /// Returns ranked league entries for a PUUID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::SummonerNotFound`] if the PUUID is
    /// unknown, or an upstream error.
    pub async fn league_entries(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<LeagueResponse, ServiceError> {
        let entries = self
            .client
            .league_entries_by_puuid(platform, puuid)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::SummonerNotFound(puuid.to_string())
                } else {
                    e.into()
                }
            })?;

        Ok(LeagueResponse {
            puuid: puuid.to_string(),
            platform: platform.to_string(),
            entries: entries.into_iter().map(LeagueEntryView::from).collect(),
        })
    }

    /// Returns a page of match IDs for a PUUID, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::SummonerNotFound`] if the PUUID is
    /// unknown, or an upstream error.
    pub async fn match_history(
        &self,
        platform: Platform,
        puuid: &str,
        params: &MatchHistoryParams,
    ) -> Result<MatchIdsResponse, ServiceError> {
        let params = params.clamped();
        let match_ids = self
            .client
            .match_ids_by_puuid(
                platform.regional_route(),
                puuid,
                params.start,
                params.count,
                params.queue,
            )
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::SummonerNotFound(puuid.to_string())
                } else {
                    e.into()
                }
            })?;

        Ok(MatchIdsResponse {
            puuid: puuid.to_string(),
            start: params.start,
            count: params.count,
            match_ids,
        })
    }

    /// Composes full summaries for a player's most recent matches.
    ///
    /// Match details are fetched with a bounded, order-preserving
    /// fan-out so one slow upstream call cannot starve the rest while
    /// the response still lists matches most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::SummonerNotFound`] if the PUUID is
    /// unknown, or an upstream error from any detail fetch.
    pub async fn recent_matches(
        &self,
        platform: Platform,
        puuid: &str,
        params: &RecentMatchesParams,
    ) -> Result<RecentMatchesResponse, ServiceError> {
        let params = params.clamped();
        let route = platform.regional_route();
        let match_ids = self
            .client
            .match_ids_by_puuid(route, puuid, 0, params.count, params.queue)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::SummonerNotFound(puuid.to_string())
                } else {
                    e.into()
                }
            })?;

        let matches: Vec<MatchSummary> = stream::iter(match_ids)
            .map(|match_id| {
                let service = self.clone();
                async move { service.match_summary(platform, &match_id).await }
            })
            .buffered(self.match_fetch_concurrency)
            .try_collect()
            .await?;

        Ok(RecentMatchesResponse {
            puuid: puuid.to_string(),
            matches,
        })
    }

    /// Returns a condensed view of a single match.
    ///
    /// Finished matches never change upstream, so hits are served from
    /// the cache for its full TTL.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MatchNotFound`] if the match does not
    /// exist, or an upstream error.
    pub async fn match_summary(
        &self,
        platform: Platform,
        match_id: &str,
    ) -> Result<MatchSummary, ServiceError> {
        let key = format!("match:{match_id}");
        if let Some(hit) = self.cache_get::<MatchSummary>(&key).await {
            return Ok(hit);
        }

        let m = self
            .client
            .match_by_id(platform.regional_route(), match_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::MatchNotFound(match_id.to_string())
                } else {
                    e.into()
                }
            })?;

        let summary = MatchSummary::from(m);
        self.cache_put(key, &summary).await;
        Ok(summary)
    }

    /// Reads a typed value from the cache, treating decode failures as
    /// misses.
    async fn cache_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        let value = cache.get(key).await?;
        match serde_json::from_value(value) {
            Ok(typed) => {
                tracing::trace!(key, "cache hit");
                Some(typed)
            }
            Err(_) => None,
        }
    }

    /// Writes a typed value to the cache; serialization failures skip
    /// caching rather than failing the request.
    async fn cache_put<T: Serialize>(&self, key: String, value: &T) {
        if let Some(cache) = &self.cache
            && let Ok(json) = serde_json::to_value(value)
        {
            cache.put(key, json).await;
        }
    }
}
