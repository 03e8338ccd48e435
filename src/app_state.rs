//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::DataService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Data service for all request orchestration.
    pub data_service: Arc<DataService>,
}
