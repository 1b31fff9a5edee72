//! # Airfield
//!
//! Small tutorial HTTP services exposing a static in-memory airport dataset
//! through generated REST endpoints.
//!
//! The interesting part is the reflective indexer/router pair: given a record
//! type and a set of allowed field names, [`index::FieldIndex`] groups every
//! record by the string value of each allowed field, and
//! [`api::register_field_routes`] installs one `GET /<Collection>/By<Field>/:value`
//! lookup route per allowed field — no field-specific handler code anywhere.
//!
//! ## Modules
//!
//! - [`model`]: The `Airport` record and the `FieldAccess` accessor table
//! - [`index`]: Field index built once at startup
//! - [`dataset`]: Dataset file loading and the immutable in-memory snapshot
//! - [`api`]: REST API server with Axum, including the dynamic route generator
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use airfield::api::{serve, AppState};
//! use airfield::config::Config;
//! use airfield::dataset::Dataset;
//! use airfield::model::Airport;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     config.validate()?;
//!
//!     let allowed = config.dataset.allowed_fields.iter().cloned().collect();
//!     let dataset: Dataset<Airport> =
//!         Dataset::from_json_file(Path::new(&config.dataset.path), allowed)?;
//!
//!     let state = AppState::with_dataset("AIRPORT", config.clone(), Arc::new(dataset));
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod index;
pub mod model;

// Re-export top-level types for convenience
pub use api::{build_router, register_field_routes, serve, ApiError, AppState};
pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
pub use dataset::{Dataset, DatasetError};
pub use index::FieldIndex;
pub use model::{Airport, FieldAccess};
