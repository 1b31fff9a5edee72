//! Airport Collection Routes
//!
//! Baseline endpoints over the full collection.
//!
//! - GET /Airports - Every airport in the dataset
//! - GET /Airports/:id - One airport by its designated identifier (Code)
//!
//! Both share the status-code policy of the generated field routes: a miss
//! is not an error, it is 200/404 plus the (possibly empty) payload.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::model::Airport;

/// GET /Airports
///
/// List the full collection. 200 with every record, or 404 with an empty
/// array when the dataset is empty.
pub async fn list_airports(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Vec<Airport>>) {
    let records: Vec<Airport> = state
        .airports()
        .map(|dataset| dataset.records().to_vec())
        .unwrap_or_default();

    let status = if records.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Json(records))
}

/// GET /Airports/:id
///
/// Look up one airport by Code with a linear scan; first match wins when the
/// identifier is duplicated. 200 with the record, or 404 with `null`.
///
/// The scan is fine for this dataset (small, static); it would not scale to
/// a large or growing collection.
pub async fn get_airport(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Option<Airport>>) {
    let found = state.airports().and_then(|dataset| {
        dataset
            .records()
            .iter()
            .find(|airport| airport.code == id)
            .cloned()
    });

    let status = if found.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Json(found))
}
