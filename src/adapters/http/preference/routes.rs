//! HTTP routes for preference flag endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{get_flags, set_flags};

pub fn preference_routes() -> Router<AppState> {
    Router::new()
        .route("/bool_list", post(set_flags))
        .route("/bool_list/:id", get(get_flags))
}
