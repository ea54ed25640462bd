//! HTTP handlers for preference flag endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    domain_error_response, rejection_response, validation_error_response,
};
use crate::adapters::http::AppState;
use crate::adapters::wire::FlagsMessage;
use crate::domain::foundation::UserId;

/// POST /bool_list - Replace a user's flags with `[user_id, [bool, ...]]`
pub async fn set_flags(
    State(state): State<AppState>,
    body: Result<Json<FlagsMessage>, JsonRejection>,
) -> Response {
    let Json((user, flags)) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let user_id = match user.to_user_id() {
        Ok(id) => id,
        Err(e) => return validation_error_response(e),
    };

    match state.aggregator.set_flags(user_id, flags).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /bool_list/:id - Flag list, or `null` for an unknown user
pub async fn get_flags(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let user_id = match UserId::new(id) {
        Ok(id) => id,
        Err(e) => return validation_error_response(e),
    };

    match state.aggregator.get_flags(user_id).await {
        Ok(flags) => (StatusCode::OK, Json(flags)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
