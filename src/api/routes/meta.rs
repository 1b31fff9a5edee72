//! Meta Routes
//!
//! The root echo endpoint: a liveness-style route returning process
//! metadata, useful for checking which service instance answered.
//!
//! - GET / - Service name, version, uptime and argv

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::state::AppState;

/// Process metadata returned by the root endpoint
#[derive(Debug, Serialize)]
pub struct ProcessInfo {
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub args: Vec<String>,
}

/// GET /
///
/// Echo process metadata. Always 200.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<ProcessInfo> {
    Json(ProcessInfo {
        service: state.service_name.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        args: std::env::args().collect(),
    })
}
