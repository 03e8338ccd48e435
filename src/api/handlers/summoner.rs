//! Summoner profile handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::SummonerProfile;
use crate::app_state::AppState;
use crate::domain::Platform;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /summoners/:region/by-riot-id/:game_name/:tag_line` — Composed
/// summoner profile.
///
/// # Errors
///
/// Returns [`ServiceError::UnknownPlatform`] for an unknown region and
/// [`ServiceError::SummonerNotFound`] if the Riot ID does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/summoners/{region}/by-riot-id/{game_name}/{tag_line}",
    tag = "Summoners",
    summary = "Get a summoner profile by Riot ID",
    description = "Resolves the Riot ID to a PUUID and composes the summoner record and ranked standings into one view.",
    params(
        ("region" = String, Path, description = "Platform routing value, e.g. `na1`, `euw1`, `kr`"),
        ("game_name" = String, Path, description = "Riot ID game name"),
        ("tag_line" = String, Path, description = "Riot ID tag line"),
    ),
    responses(
        (status = 200, description = "Composed summoner profile", body = SummonerProfile),
        (status = 400, description = "Unknown platform", body = ErrorResponse),
        (status = 404, description = "Summoner not found", body = ErrorResponse),
    )
)]
pub async fn get_summoner_profile(
    State(state): State<AppState>,
    Path((region, game_name, tag_line)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ServiceError> {
    let platform: Platform = region.parse()?;
    let profile = state
        .data_service
        .summoner_profile(platform, &game_name, &tag_line)
        .await?;
    Ok(Json(profile))
}

/// Summoner profile routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/summoners/{region}/by-riot-id/{game_name}/{tag_line}",
        get(get_summoner_profile),
    )
}
