//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.
//!
//! Everything here is built during startup and read-only afterwards: request
//! handlers never mutate the dataset or the index.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::model::Airport;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service name reported by the root echo endpoint
    pub service_name: &'static str,
    /// Service configuration
    pub config: Arc<Config>,
    /// Airport dataset with its field index; `None` for services that
    /// expose no collection (the flights scaffold)
    dataset: Option<Arc<Dataset<Airport>>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state for a service backed by an airport dataset
    pub fn with_dataset(
        service_name: &'static str,
        config: Config,
        dataset: Arc<Dataset<Airport>>,
    ) -> Self {
        Self {
            service_name,
            config: Arc::new(config),
            dataset: Some(dataset),
            start_time: Instant::now(),
        }
    }

    /// Create state for a service with no collection routes
    pub fn bare(service_name: &'static str, config: Config) -> Self {
        Self {
            service_name,
            config: Arc::new(config),
            dataset: None,
            start_time: Instant::now(),
        }
    }

    /// The airport dataset, if this service carries one
    pub fn airports(&self) -> Option<&Arc<Dataset<Airport>>> {
        self.dataset.as_ref()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
