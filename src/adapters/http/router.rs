//! Top-level router.

use std::time::Duration;

use axum::{http::HeaderName, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::interest::interest_routes;
use super::preference::preference_routes;
use super::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the full API router.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(interest_routes())
        .merge(preference_routes())
        .route("/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}

async fn health() -> &'static str {
    "ok"
}
