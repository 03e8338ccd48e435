//! Wire models for the subset of the Riot API payloads this service reads.
//!
//! Field names mirror the upstream camelCase JSON. Only the fields the
//! service actually consumes are modeled; unknown fields are ignored by
//! serde. Fields Riot omits for some shards or queue states carry
//! defaults so a partial payload still deserializes.

use serde::Deserialize;

/// account-v1 response: `/riot/account/v1/accounts/by-riot-id/{name}/{tag}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// Globally unique 78-character player identifier.
    pub puuid: String,
    /// Riot ID game name. Absent for accounts that never set one.
    #[serde(default)]
    pub game_name: Option<String>,
    /// Riot ID tag line.
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// summoner-v4 response: `/lol/summoner/v4/summoners/by-puuid/{puuid}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Player identifier, echoed by the endpoint.
    pub puuid: String,
    /// Encrypted summoner ID. Being phased out upstream.
    #[serde(default)]
    pub id: Option<String>,
    /// Profile icon identifier.
    #[serde(default)]
    pub profile_icon_id: i32,
    /// Epoch milliseconds of the last profile modification.
    #[serde(default)]
    pub revision_date: i64,
    /// Summoner level.
    #[serde(default)]
    pub summoner_level: i64,
}

/// league-v4 entry: `/lol/league/v4/entries/by-puuid/{puuid}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    /// League identifier.
    #[serde(default)]
    pub league_id: Option<String>,
    /// Queue discriminator, e.g. `RANKED_SOLO_5x5`.
    pub queue_type: String,
    /// Tier name (`IRON` … `CHALLENGER`). Absent while unranked.
    #[serde(default)]
    pub tier: Option<String>,
    /// Division within the tier (`I` … `IV`). Absent in apex tiers.
    #[serde(default)]
    pub rank: Option<String>,
    /// Current LP.
    #[serde(default)]
    pub league_points: i32,
    /// Ranked wins this season.
    #[serde(default)]
    pub wins: i32,
    /// Ranked losses this season.
    #[serde(default)]
    pub losses: i32,
    /// Whether the player is on a hot streak.
    #[serde(default)]
    pub hot_streak: bool,
    /// Veteran flag.
    #[serde(default)]
    pub veteran: bool,
    /// Fresh-blood flag.
    #[serde(default)]
    pub fresh_blood: bool,
    /// Inactivity flag.
    #[serde(default)]
    pub inactive: bool,
}

/// match-v5 response: `/lol/match/v5/matches/{match_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    /// Match metadata envelope.
    pub metadata: MatchMetadataDto,
    /// Match info body.
    pub info: MatchInfoDto,
}

/// Metadata envelope of a match-v5 payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadataDto {
    /// Match identifier, e.g. `NA1_1234567890`.
    pub match_id: String,
    /// PUUIDs of every participant.
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Info body of a match-v5 payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    /// Epoch milliseconds when the game was created.
    #[serde(default)]
    pub game_creation: i64,
    /// Game duration. Seconds when `game_end_timestamp` is present,
    /// milliseconds on older payloads that lack it.
    #[serde(default)]
    pub game_duration: i64,
    /// Epoch milliseconds when the game ended. Added in patch 11.20.
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    /// Game mode string, e.g. `CLASSIC`.
    #[serde(default)]
    pub game_mode: String,
    /// Patch version the game ran on.
    #[serde(default)]
    pub game_version: String,
    /// Numeric queue identifier, e.g. 420 for ranked solo.
    #[serde(default)]
    pub queue_id: i32,
    /// Per-player results.
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

/// Per-participant slice of a match-v5 payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    /// Player identifier.
    #[serde(default)]
    pub puuid: String,
    /// Riot ID game name at match time.
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    /// Riot ID tag line at match time. Upstream spells this `riotIdTagline`.
    #[serde(default, rename = "riotIdTagline")]
    pub riot_id_tag_line: Option<String>,
    /// Legacy summoner name. Empty on current payloads.
    #[serde(default)]
    pub summoner_name: Option<String>,
    /// Champion played.
    #[serde(default)]
    pub champion_name: String,
    /// Team identifier (100 blue, 200 red).
    #[serde(default)]
    pub team_id: i32,
    /// Champion level reached.
    #[serde(default)]
    pub champ_level: i32,
    /// Kills.
    #[serde(default)]
    pub kills: i32,
    /// Deaths.
    #[serde(default)]
    pub deaths: i32,
    /// Assists.
    #[serde(default)]
    pub assists: i32,
    /// Lane minions killed.
    #[serde(default)]
    pub total_minions_killed: i32,
    /// Jungle monsters killed.
    #[serde(default)]
    pub neutral_minions_killed: i32,
    /// Gold earned.
    #[serde(default)]
    pub gold_earned: i32,
    /// Whether the participant's team won.
    #[serde(default)]
    pub win: bool,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn account_deserializes_from_camel_case() {
        let json = r#"{"puuid":"abc-123","gameName":"Hide on bush","tagLine":"KR1"}"#;
        let Ok(account) = serde_json::from_str::<AccountDto>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(account.puuid, "abc-123");
        assert_eq!(account.game_name.as_deref(), Some("Hide on bush"));
        assert_eq!(account.tag_line.as_deref(), Some("KR1"));
    }

    #[test]
    fn league_entry_tolerates_missing_tier() {
        let json = r#"{"queueType":"RANKED_SOLO_5x5","leaguePoints":42,"wins":10,"losses":5}"#;
        let Ok(entry) = serde_json::from_str::<LeagueEntryDto>(json) else {
            panic!("deserialization failed");
        };
        assert!(entry.tier.is_none());
        assert_eq!(entry.league_points, 42);
        assert!(!entry.hot_streak);
    }

    #[test]
    fn participant_reads_riot_id_tagline_spelling() {
        let json = r#"{"puuid":"p1","riotIdGameName":"Faker","riotIdTagline":"T1","championName":"Azir","teamId":100,"kills":7,"deaths":1,"assists":9,"win":true}"#;
        let Ok(p) = serde_json::from_str::<ParticipantDto>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(p.riot_id_tag_line.as_deref(), Some("T1"));
        assert_eq!(p.champion_name, "Azir");
        assert!(p.win);
    }

    #[test]
    fn match_ignores_unknown_fields() {
        let json = r#"{
            "metadata": {"matchId": "NA1_1", "participants": ["p1"], "dataVersion": "2"},
            "info": {"gameCreation": 1700000000000, "gameDuration": 1800,
                     "gameEndTimestamp": 1700000180000, "gameMode": "CLASSIC",
                     "gameVersion": "14.1.1", "queueId": 420, "mapId": 11,
                     "participants": []}
        }"#;
        let Ok(m) = serde_json::from_str::<MatchDto>(json) else {
            panic!("deserialization failed");
        };
        assert_eq!(m.metadata.match_id, "NA1_1");
        assert_eq!(m.info.queue_id, 420);
        assert_eq!(m.info.game_end_timestamp, Some(1_700_000_180_000));
    }
}
