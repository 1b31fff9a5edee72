//! Airfield REST API
//!
//! HTTP API layer for the airfield services, built with Axum.
//!
//! # Endpoints
//!
//! ## Meta
//! - `GET /` - Process metadata echo
//!
//! ## Airports (dataset-backed services only)
//! - `GET /Airports` - Full collection
//! - `GET /Airports/:id` - One airport by Code
//! - `GET /Airports/By<Field>/:value` - One route per allowed field,
//!   generated at startup
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Example
//!
//! ```rust,ignore
//! use airfield::api::{build_router, serve, AppState};
//! use airfield::config::Config;
//! use airfield::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let allowed = config.dataset.allowed_fields.iter().cloned().collect();
//!     let dataset = Dataset::from_json_file(config.dataset.path.as_ref(), allowed)?;
//!
//!     let state = AppState::with_dataset("AIRPORT", config.clone(), Arc::new(dataset));
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dynamic;
pub mod error;
pub mod routes;
pub mod state;

pub use dynamic::register_field_routes;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use crate::model::Airport;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router for a service instance.
///
/// The scaffold routes (echo, health) are always present; the collection
/// routes and the generated per-field lookup routes exist only when the
/// state carries a dataset. Registration happens exactly once, before the
/// listener binds, and the route table never changes afterwards.
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .route("/", get(routes::meta::root))
        .route("/health/live", get(routes::health::liveness))
        .route("/health/ready", get(routes::health::readiness));

    if let Some(dataset) = shared_state.airports() {
        router = router
            .route("/Airports", get(routes::airports::list_airports))
            .route("/Airports/:id", get(routes::airports::get_airport));

        router = register_field_routes(
            router,
            "Airports",
            dataset.allowed_fields(),
            |state: &Arc<AppState>, field: &str, value: &str| -> Vec<Airport> {
                state
                    .airports()
                    .map(|dataset| dataset.lookup(field, value).into_iter().cloned().collect())
                    .unwrap_or_default()
            },
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &crate::config::ServerConfig) -> ApiResult<()> {
    let service_name = state.service_name;
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(service = service_name, "listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!(service = service_name, "shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
