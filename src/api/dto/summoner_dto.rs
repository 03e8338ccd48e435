//! Summoner profile DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::league_dto::LeagueEntryView;

/// Composed summoner profile: account identity, summoner record, and
/// ranked standings in one view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummonerProfile {
    /// Globally unique player identifier.
    pub puuid: String,
    /// Riot ID game name.
    pub game_name: Option<String>,
    /// Riot ID tag line.
    pub tag_line: Option<String>,
    /// Platform the summoner record was read from.
    pub platform: String,
    /// Profile icon identifier.
    pub profile_icon_id: i32,
    /// Summoner level.
    pub summoner_level: i64,
    /// When the profile was last modified upstream.
    pub revision_date: DateTime<Utc>,
    /// Ranked standings; empty while unranked.
    pub league_entries: Vec<LeagueEntryView>,
}
