//! Ranked league handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::LeagueResponse;
use crate::app_state::AppState;
use crate::domain::Platform;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /summoners/:region/:puuid/league` — Ranked standings.
///
/// # Errors
///
/// Returns [`ServiceError::UnknownPlatform`] for an unknown region and
/// [`ServiceError::SummonerNotFound`] if the PUUID does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/summoners/{region}/{puuid}/league",
    tag = "Summoners",
    summary = "Get ranked league entries",
    description = "Returns one entry per ranked queue with win rate; empty while unranked.",
    params(
        ("region" = String, Path, description = "Platform routing value, e.g. `na1`, `euw1`, `kr`"),
        ("puuid" = String, Path, description = "Player PUUID"),
    ),
    responses(
        (status = 200, description = "Ranked league entries", body = LeagueResponse),
        (status = 400, description = "Unknown platform", body = ErrorResponse),
        (status = 404, description = "Summoner not found", body = ErrorResponse),
    )
)]
pub async fn get_league_entries(
    State(state): State<AppState>,
    Path((region, puuid)): Path<(String, String)>,
) -> Result<impl IntoResponse, ServiceError> {
    let platform: Platform = region.parse()?;
    let league = state.data_service.league_entries(platform, &puuid).await?;
    Ok(Json(league))
}

/// League routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summoners/{region}/{puuid}/league", get(get_league_entries))
}
