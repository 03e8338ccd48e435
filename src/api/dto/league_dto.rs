//! Ranked league DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::riot::types::LeagueEntryDto;

/// A single ranked queue standing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueEntryView {
    /// Queue discriminator, e.g. `RANKED_SOLO_5x5`.
    pub queue_type: String,
    /// Tier name (`IRON` … `CHALLENGER`). `null` while unranked.
    pub tier: Option<String>,
    /// Division within the tier (`I` … `IV`). `null` in apex tiers.
    pub rank: Option<String>,
    /// Current league points.
    pub league_points: i32,
    /// Ranked wins this season.
    pub wins: i32,
    /// Ranked losses this season.
    pub losses: i32,
    /// Win rate in percent, rounded to one decimal place.
    pub win_rate: f64,
    /// Whether the player is on a hot streak.
    pub hot_streak: bool,
}

impl From<LeagueEntryDto> for LeagueEntryView {
    fn from(entry: LeagueEntryDto) -> Self {
        let games = entry.wins + entry.losses;
        let win_rate = if games > 0 {
            (f64::from(entry.wins) * 1000.0 / f64::from(games)).round() / 10.0
        } else {
            0.0
        };
        Self {
            queue_type: entry.queue_type,
            tier: entry.tier,
            rank: entry.rank,
            league_points: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
            win_rate,
            hot_streak: entry.hot_streak,
        }
    }
}

/// Response body for the league endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueResponse {
    /// Player identifier the entries belong to.
    pub puuid: String,
    /// Platform the entries were read from.
    pub platform: String,
    /// One entry per ranked queue; empty while unranked.
    pub entries: Vec<LeagueEntryView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(wins: i32, losses: i32) -> LeagueEntryDto {
        LeagueEntryDto {
            league_id: None,
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: Some("GOLD".to_string()),
            rank: Some("II".to_string()),
            league_points: 54,
            wins,
            losses,
            hot_streak: false,
            veteran: false,
            fresh_blood: false,
            inactive: false,
        }
    }

    #[test]
    fn win_rate_is_rounded_to_one_decimal() {
        let view = LeagueEntryView::from(entry(2, 1));
        assert_eq!(view.win_rate, 66.7);
    }

    #[test]
    fn win_rate_is_zero_without_games() {
        let view = LeagueEntryView::from(entry(0, 0));
        assert_eq!(view.win_rate, 0.0);
    }
}
