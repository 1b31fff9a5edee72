//! Dynamic Route Generator
//!
//! Installs one `GET /<Collection>/By<Field>/:value` route per allowed field
//! of a record type, so clients can query by any permitted field without a
//! handler being written for it.
//!
//! # Example
//! ```ignore
//! let router = register_field_routes(router, "Airports", &allowed, lookup);
//! // GET /Airports/ByCity/Denver, /Airports/ByState/CO, ...
//! ```
//!
//! # Design Notes
//! - Allowed names that are not fields of the record type get no route
//!   (same lenient policy as the indexer)
//! - Must be called once, during startup; re-invocation would panic axum's
//!   route table on the duplicate paths
//! - The lookup callback decides where matches come from; handlers only map
//!   its result onto the 200/404-with-payload convention

use crate::model::FieldAccess;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Register one lookup route per allowed field that exists on `T`.
///
/// Each generated route extracts the path parameter, calls
/// `lookup(state, field, value)`, and answers 200 with the matches when any
/// exist or 404 with an empty array when none do. Any string is a legal
/// lookup value; a miss is not an error.
pub fn register_field_routes<S, T, L>(
    mut router: Router<S>,
    collection: &str,
    allowed: &BTreeSet<String>,
    lookup: L,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    T: FieldAccess + Serialize + 'static,
    L: Fn(&S, &str, &str) -> Vec<T> + Clone + Send + Sync + 'static,
{
    for field in allowed {
        if !T::has_field(field) {
            tracing::warn!(field = %field, "allowed field not on record type, no route registered");
            continue;
        }

        let path = format!("/{}/By{}/:value", collection, field);
        let field_name = field.clone();
        let lookup = lookup.clone();

        router = router.route(
            &path,
            get(move |State(state): State<S>, Path(value): Path<String>| async move {
                let matches = lookup(&state, &field_name, &value);
                let status = if matches.is_empty() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::OK
                };
                (status, Json(matches))
            }),
        );

        tracing::info!(route = %path, "registered field lookup route");
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::borrow::Cow;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    // A record type of its own, to show the generator is not tied to the
    // airport entity.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    struct Booking {
        reference: String,
        passenger: String,
    }

    impl FieldAccess for Booking {
        const FIELDS: &'static [&'static str] = &["Reference", "Passenger"];

        fn field(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "Reference" => Some(Cow::from(self.reference.as_str())),
                "Passenger" => Some(Cow::from(self.passenger.as_str())),
                _ => None,
            }
        }
    }

    fn booking(reference: &str, passenger: &str) -> Booking {
        Booking {
            reference: reference.to_string(),
            passenger: passenger.to_string(),
        }
    }

    fn test_app(allowed: &[&str]) -> Router {
        let records = Arc::new(vec![
            booking("AAA", "Ada"),
            booking("BBB", "Grace"),
            booking("CCC", "Ada"),
        ]);

        let allowed: BTreeSet<String> = allowed.iter().map(|s| s.to_string()).collect();

        let router = register_field_routes(
            Router::new(),
            "Bookings",
            &allowed,
            |state: &Arc<Vec<Booking>>, field: &str, value: &str| {
                state
                    .iter()
                    .filter(|b| b.field(field).map(|v| v == value).unwrap_or(false))
                    .cloned()
                    .collect()
            },
        );

        router.with_state(records)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_match_returns_200_with_sequence_in_order() {
        let app = test_app(&["Passenger"]);

        let (status, body) = get_json(&app, "/Bookings/ByPassenger/Ada").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["reference"], "AAA");
        assert_eq!(body[1]["reference"], "CCC");
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_miss_returns_404_with_empty_array() {
        let app = test_app(&["Passenger"]);

        let (status, body) = get_json(&app, "/Bookings/ByPassenger/Nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_one_route_per_allowed_field() {
        let app = test_app(&["Reference", "Passenger"]);

        let (status, _) = get_json(&app, "/Bookings/ByReference/BBB").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get_json(&app, "/Bookings/ByPassenger/Grace").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_field_outside_allowed_set_gets_no_route() {
        let app = test_app(&["Passenger"]);

        // Reference is a real field, but it was not allowed
        let (status, _) = get_json(&app, "/Bookings/ByReference/AAA").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_allowed_field_is_skipped_without_panic() {
        let app = test_app(&["Passenger", "Seat"]);

        let (status, _) = get_json(&app, "/Bookings/BySeat/12A").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // The valid field still got its route
        let (status, _) = get_json(&app, "/Bookings/ByPassenger/Ada").await;
        assert_eq!(status, StatusCode::OK);
    }
}
