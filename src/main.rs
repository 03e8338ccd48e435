//! opgl-data server entry point.
//!
//! Initializes tracing, loads configuration, and hands control to the
//! server bootstrap. Any configuration or bootstrap error is logged
//! once at error level and terminates the process with a non-zero
//! status.

use tracing_subscriber::EnvFilter;

use opgl_data::config::ServiceConfig;
use opgl_data::server;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration error");
            std::process::exit(1);
        }
    };

    // Wire and serve
    if let Err(err) = server::run(config).await {
        tracing::error!(error = %err, "fatal server error");
        std::process::exit(1);
    }
}
