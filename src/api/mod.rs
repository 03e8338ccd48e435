//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; system endpoints
//! live at the root. With the `swagger-ui` feature enabled (default),
//! interactive documentation is served at `/docs`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every endpoint this service exposes.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::system::health_handler,
        handlers::system::platforms_handler,
        handlers::summoner::get_summoner_profile,
        handlers::league::get_league_entries,
        handlers::matches::get_match_history,
        handlers::matches::get_recent_matches,
        handlers::matches::get_match,
    ),
    tags(
        (name = "Summoners", description = "Summoner profiles and ranked standings"),
        (name = "Matches", description = "Match history and match summaries"),
        (name = "System", description = "Health and configuration endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
