//! Airport API Server
//!
//! Run with: cargo run --bin airport-api
//!
//! # Configuration
//!
//! Environment variables (override any config.toml):
//! - `AIRFIELD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `AIRFIELD_PORT`: Port to listen on (default: 8080)
//! - `AIRFIELD_DATA_PATH`: Dataset file (default: data/airports.json)
//! - `AIRFIELD_ALLOWED_FIELDS`: Comma-separated lookup fields
//!   (default: State,City,Country)
//! - `RUST_LOG`: Log level (default: info)

use airfield::api::{serve, AppState};
use airfield::config::Config;
use airfield::dataset::Dataset;
use airfield::model::Airport;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "AIRPORT";

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
        "Starting airport API server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::load_default();
    config.validate()?;

    tracing::info!("Dataset file: {}", config.dataset.path);
    tracing::info!("Allowed lookup fields: {:?}", config.dataset.allowed_fields);

    // Startup task: load the dataset, build the index, assemble the handler
    // state. The listener is not bound until this signals readiness; any
    // failure here aborts the process.
    let (ready_tx, ready_rx) = oneshot::channel();
    let startup_config = config.clone();

    tokio::spawn(async move {
        let allowed: BTreeSet<String> = startup_config
            .dataset
            .allowed_fields
            .iter()
            .cloned()
            .collect();

        let result = Dataset::<Airport>::from_json_file(
            Path::new(&startup_config.dataset.path),
            allowed,
        )
        .map(|dataset| {
            tracing::info!(
                records = dataset.len(),
                indexed_fields = dataset.index().field_count(),
                "dataset indexed"
            );
            AppState::with_dataset(SERVICE_NAME, startup_config, Arc::new(dataset))
        });

        let _ = ready_tx.send(result);
    });

    let state = ready_rx.await??;

    serve(state, &config.server).await?;

    tracing::info!(service = SERVICE_NAME, "Airport API server stopped");
    Ok(())
}
