//! Match history and match summary DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::riot::types::{MatchDto, ParticipantDto};

/// Response body for the match-ID history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchIdsResponse {
    /// Player identifier the history belongs to.
    pub puuid: String,
    /// Offset this page starts at.
    pub start: u32,
    /// Number of IDs requested.
    pub count: u32,
    /// Match IDs, most recent first.
    pub match_ids: Vec<String>,
}

/// Response body for the recent-matches endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecentMatchesResponse {
    /// Player identifier the matches belong to.
    pub puuid: String,
    /// Match summaries, most recent first.
    pub matches: Vec<MatchSummary>,
}

/// Condensed view of a single match.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchSummary {
    /// Match identifier, e.g. `NA1_1234567890`.
    pub match_id: String,
    /// Numeric queue identifier.
    pub queue_id: i32,
    /// Game mode string, e.g. `CLASSIC`.
    pub game_mode: String,
    /// Patch version the game ran on.
    pub game_version: String,
    /// When the game was created.
    pub game_creation: DateTime<Utc>,
    /// Game duration in seconds.
    pub duration_secs: i64,
    /// Per-player results, in upstream order.
    pub participants: Vec<ParticipantSummary>,
}

/// Condensed per-player result within a match.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantSummary {
    /// Player identifier.
    pub puuid: String,
    /// Riot ID in `gameName#tagLine` form, when known.
    pub riot_id: Option<String>,
    /// Champion played.
    pub champion_name: String,
    /// Team identifier (100 blue, 200 red).
    pub team_id: i32,
    /// Champion level reached.
    pub champ_level: i32,
    /// Kills.
    pub kills: i32,
    /// Deaths.
    pub deaths: i32,
    /// Assists.
    pub assists: i32,
    /// Kill/death/assist ratio, deaths floored at one.
    pub kda: f64,
    /// Creep score: lane minions plus jungle monsters.
    pub cs: i32,
    /// Gold earned.
    pub gold_earned: i32,
    /// Whether the participant's team won.
    pub win: bool,
}

impl From<MatchDto> for MatchSummary {
    fn from(m: MatchDto) -> Self {
        // Pre-11.20 payloads lack gameEndTimestamp and report the
        // duration in milliseconds instead of seconds.
        let duration_secs = if m.info.game_end_timestamp.is_some() {
            m.info.game_duration
        } else {
            m.info.game_duration / 1000
        };
        Self {
            match_id: m.metadata.match_id,
            queue_id: m.info.queue_id,
            game_mode: m.info.game_mode,
            game_version: m.info.game_version,
            game_creation: DateTime::from_timestamp_millis(m.info.game_creation)
                .unwrap_or(DateTime::UNIX_EPOCH),
            duration_secs,
            participants: m
                .info
                .participants
                .into_iter()
                .map(ParticipantSummary::from)
                .collect(),
        }
    }
}

impl From<ParticipantDto> for ParticipantSummary {
    fn from(p: ParticipantDto) -> Self {
        let riot_id = match (&p.riot_id_game_name, &p.riot_id_tag_line) {
            (Some(name), Some(tag)) => Some(format!("{name}#{tag}")),
            _ => p.summoner_name.clone().filter(|n| !n.is_empty()),
        };
        let kda = f64::from(p.kills + p.assists) / f64::from(p.deaths.max(1));
        Self {
            puuid: p.puuid,
            riot_id,
            champion_name: p.champion_name,
            team_id: p.team_id,
            champ_level: p.champ_level,
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            kda: (kda * 100.0).round() / 100.0,
            cs: p.total_minions_killed + p.neutral_minions_killed,
            gold_earned: p.gold_earned,
            win: p.win,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn participant_json() -> &'static str {
        r#"{"puuid":"p1","riotIdGameName":"Faker","riotIdTagline":"T1",
            "championName":"Azir","teamId":100,"champLevel":18,
            "kills":7,"deaths":0,"assists":9,
            "totalMinionsKilled":230,"neutralMinionsKilled":12,
            "goldEarned":14000,"win":true}"#
    }

    #[test]
    fn kda_floors_deaths_at_one() {
        let Ok(p) = serde_json::from_str::<ParticipantDto>(participant_json()) else {
            panic!("deserialization failed");
        };
        let summary = ParticipantSummary::from(p);
        assert_eq!(summary.kda, 16.0);
        assert_eq!(summary.cs, 242);
        assert_eq!(summary.riot_id.as_deref(), Some("Faker#T1"));
    }

    #[test]
    fn modern_payload_duration_is_taken_as_seconds() {
        let json = r#"{
            "metadata": {"matchId": "KR_1", "participants": []},
            "info": {"gameCreation": 1700000000000, "gameDuration": 1800,
                     "gameEndTimestamp": 1700001800000, "gameMode": "CLASSIC",
                     "gameVersion": "14.1.1", "queueId": 420, "participants": []}
        }"#;
        let Ok(m) = serde_json::from_str::<MatchDto>(json) else {
            panic!("deserialization failed");
        };
        let summary = MatchSummary::from(m);
        assert_eq!(summary.duration_secs, 1800);
    }

    #[test]
    fn legacy_payload_duration_is_converted_from_millis() {
        let json = r#"{
            "metadata": {"matchId": "KR_2", "participants": []},
            "info": {"gameCreation": 1600000000000, "gameDuration": 1800000,
                     "gameMode": "CLASSIC", "gameVersion": "11.19.1",
                     "queueId": 420, "participants": []}
        }"#;
        let Ok(m) = serde_json::from_str::<MatchDto>(json) else {
            panic!("deserialization failed");
        };
        let summary = MatchSummary::from(m);
        assert_eq!(summary.duration_secs, 1800);
    }
}
