//! Match history and match detail handlers.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    MatchHistoryParams, MatchIdsResponse, MatchSummary, RecentMatchesParams, RecentMatchesResponse,
};
use crate::app_state::AppState;
use crate::domain::Platform;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /summoners/:region/:puuid/matches` — Match-ID history.
///
/// # Errors
///
/// Returns [`ServiceError::UnknownPlatform`] for an unknown region and
/// [`ServiceError::SummonerNotFound`] if the PUUID does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/summoners/{region}/{puuid}/matches",
    tag = "Matches",
    summary = "Get match-ID history",
    description = "Returns a page of match IDs for the player, most recent first.",
    params(
        ("region" = String, Path, description = "Platform routing value, e.g. `na1`, `euw1`, `kr`"),
        ("puuid" = String, Path, description = "Player PUUID"),
        MatchHistoryParams,
    ),
    responses(
        (status = 200, description = "Page of match IDs", body = MatchIdsResponse),
        (status = 400, description = "Unknown platform", body = ErrorResponse),
        (status = 404, description = "Summoner not found", body = ErrorResponse),
    )
)]
pub async fn get_match_history(
    State(state): State<AppState>,
    Path((region, puuid)): Path<(String, String)>,
    Query(params): Query<MatchHistoryParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let platform: Platform = region.parse()?;
    let history = state
        .data_service
        .match_history(platform, &puuid, &params)
        .await?;
    Ok(Json(history))
}

/// `GET /summoners/:region/:puuid/matches/recent` — Recent matches with
/// full summaries.
///
/// # Errors
///
/// Returns [`ServiceError::UnknownPlatform`] for an unknown region and
/// [`ServiceError::SummonerNotFound`] if the PUUID does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/summoners/{region}/{puuid}/matches/recent",
    tag = "Matches",
    summary = "Get recent matches with summaries",
    description = "Fetches the player's most recent match IDs and composes a condensed summary for each, preserving order.",
    params(
        ("region" = String, Path, description = "Platform routing value, e.g. `na1`, `euw1`, `kr`"),
        ("puuid" = String, Path, description = "Player PUUID"),
        RecentMatchesParams,
    ),
    responses(
        (status = 200, description = "Recent match summaries", body = RecentMatchesResponse),
        (status = 400, description = "Unknown platform", body = ErrorResponse),
        (status = 404, description = "Summoner not found", body = ErrorResponse),
    )
)]
pub async fn get_recent_matches(
    State(state): State<AppState>,
    Path((region, puuid)): Path<(String, String)>,
    Query(params): Query<RecentMatchesParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let platform: Platform = region.parse()?;
    let matches = state
        .data_service
        .recent_matches(platform, &puuid, &params)
        .await?;
    Ok(Json(matches))
}

/// `GET /matches/:region/:match_id` — Single match summary.
///
/// # Errors
///
/// Returns [`ServiceError::UnknownPlatform`] for an unknown region and
/// [`ServiceError::MatchNotFound`] if the match does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/matches/{region}/{match_id}",
    tag = "Matches",
    summary = "Get a single match",
    description = "Returns a condensed view of one match including per-participant KDA and creep score.",
    params(
        ("region" = String, Path, description = "Platform routing value, e.g. `na1`, `euw1`, `kr`"),
        ("match_id" = String, Path, description = "Match identifier, e.g. `NA1_1234567890`"),
    ),
    responses(
        (status = 200, description = "Match summary", body = MatchSummary),
        (status = 400, description = "Unknown platform", body = ErrorResponse),
        (status = 404, description = "Match not found", body = ErrorResponse),
    )
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path((region, match_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ServiceError> {
    let platform: Platform = region.parse()?;
    let summary = state
        .data_service
        .match_summary(platform, &match_id)
        .await?;
    Ok(Json(summary))
}

/// Match routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summoners/{region}/{puuid}/matches", get(get_match_history))
        .route(
            "/summoners/{region}/{puuid}/matches/recent",
            get(get_recent_matches),
        )
        .route("/matches/{region}/{match_id}", get(get_match))
}
