//! Flights API Server
//!
//! Run with: cargo run --bin flights-api
//!
//! Sibling of the airport service sharing the same scaffolding (config,
//! logging, echo and health routes). It carries no dataset yet, so it
//! exposes no collection routes.
//!
//! # Configuration
//!
//! Environment variables (override any config.toml):
//! - `AIRFIELD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `AIRFIELD_PORT`: Port to listen on (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use airfield::api::{serve, AppState};
use airfield::config::Config;
use tokio::sync::oneshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "FLIGHTS";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airfield=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = SERVICE_NAME,
        "Starting flights API server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::load_default();
    config.validate()?;

    // Same readiness handshake as the airport service; the startup task has
    // nothing to load yet, so it only assembles the bare state
    let (ready_tx, ready_rx) = oneshot::channel();
    let startup_config = config.clone();

    tokio::spawn(async move {
        let _ = ready_tx.send(AppState::bare(SERVICE_NAME, startup_config));
    });

    let state = ready_rx.await?;

    serve(state, &config.server).await?;

    tracing::info!(service = SERVICE_NAME, "Flights API server stopped");
    Ok(())
}
