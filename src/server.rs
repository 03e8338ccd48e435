//! Server bootstrap: the composition root.
//!
//! [`run`] performs the one-time ordered construction of every
//! component — config → Riot client → cache → data service → state →
//! router — then binds a single listener and serves until a fatal error
//! or a shutdown signal. Termination policy stays with the caller:
//! every failure propagates as an error instead of exiting here.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::config::ServiceConfig;
use crate::domain::ResponseCache;
use crate::service::DataService;

/// Server-side cap on request handling time.
const SERVER_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the shared application state from configuration.
///
/// Construction order is fixed: Riot client first, then the cache, then
/// the data service that holds both. No network I/O happens here.
///
/// # Errors
///
/// Returns an error if the Riot client rejects the configured API key
/// or cannot be built.
pub fn build_state(config: &ServiceConfig) -> anyhow::Result<AppState> {
    let client = crate::riot::RiotClient::new(&config.riot_api_key)
        .and_then(|c| c.with_request_timeout(Duration::from_secs(config.request_timeout_secs)))
        .map(|c| c.with_max_retries(config.max_retries))
        .context("failed to build riot client")?;

    let cache = config
        .cache_enabled
        .then(|| Arc::new(ResponseCache::new(Duration::from_secs(config.cache_ttl_secs))));

    let data_service = Arc::new(DataService::new(
        Arc::new(client),
        cache,
        config.match_fetch_concurrency,
    ));

    Ok(AppState { data_service })
}

/// Builds the full application router with middleware applied.
pub fn build_app(state: AppState) -> Router {
    api::build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(SERVER_TIMEOUT)),
        )
        .with_state(state)
}

/// Wires every component and serves until failure or shutdown.
///
/// Binds exactly one listener on `0.0.0.0:<port>`. When caching is
/// enabled a background task sweeps expired entries at the configured
/// interval; it lives for the whole process and dies with it.
///
/// # Errors
///
/// Returns an error if state construction or the bind fails, or if the
/// serve loop exits abnormally.
pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let state = build_state(&config)?;

    if config.cache_enabled
        && let Some(cache) = state.data_service.cache().cloned()
    {
        spawn_cache_sweeper(cache, Duration::from_secs(config.cache_sweep_interval_secs));
    }

    let app = build_app(state);

    tracing::info!(
        port = config.server_port,
        "{} service starting on port {}",
        env!("CARGO_PKG_NAME"),
        config.server_port
    );

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;
    tracing::info!(addr = %config.socket_addr(), "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Periodically drops expired cache entries.
fn spawn_cache_sweeper(cache: Arc<ResponseCache>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = cache.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "swept expired cache entries");
            }
        }
    });
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
        // No signal handler means nothing to wait for.
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
