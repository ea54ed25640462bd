//! HTTP routes for interest endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{
    add_favorite, add_like, cancel_favorite, cancel_like, get_weights, submit_questionnaire,
};

pub fn interest_routes() -> Router<AppState> {
    Router::new()
        .route("/newq", post(submit_questionnaire))
        .route("/got_like", post(add_like))
        .route("/cancel_like", post(cancel_like))
        .route("/got_fav", post(add_favorite))
        .route("/cancel_fav", post(cancel_favorite))
        .route("/get_weights/:id", get(get_weights))
}
