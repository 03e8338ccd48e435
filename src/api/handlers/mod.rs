//! REST endpoint handlers organized by resource.

pub mod league;
pub mod matches;
pub mod summoner;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(summoner::routes())
        .merge(league::routes())
        .merge(matches::routes())
}
