//! System endpoints: health check and platform catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::Platform;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    timestamp: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}

/// Supported platform info.
#[derive(Debug, Serialize, ToSchema)]
struct PlatformInfo {
    platform: &'static str,
    regional_route: &'static str,
}

/// `GET /config/platforms` — List supported platforms.
#[utoipa::path(
    get,
    path = "/config/platforms",
    tag = "System",
    summary = "List supported platforms",
    description = "Returns every platform routing value the service accepts and the continental route it maps to.",
    responses(
        (status = 200, description = "Platform catalog", body = Vec<PlatformInfo>),
    )
)]
pub async fn platforms_handler() -> impl IntoResponse {
    let platforms: Vec<PlatformInfo> = Platform::all()
        .iter()
        .map(|p| PlatformInfo {
            platform: p.as_str(),
            regional_route: p.regional_route().as_str(),
        })
        .collect();
    (StatusCode::OK, Json(platforms))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/platforms", get(platforms_handler))
}
