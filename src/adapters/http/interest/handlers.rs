//! HTTP handlers for interest endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    domain_error_response, rejection_response, validation_error_response,
};
use crate::adapters::http::{command_metadata, AppState};
use crate::adapters::wire::{QuestionnaireMessage, ReactionMessage};
use crate::domain::foundation::UserId;
use crate::domain::interest::{ReactionAction, ReactionKind};

use super::dto::{ReactionNotAppliedResponse, WeightsResponse};

/// POST /newq - Fold a questionnaire `[user_id, [tag, ...]]`
pub async fn submit_questionnaire(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<QuestionnaireMessage>, JsonRejection>,
) -> Response {
    let Json((user, tags)) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let user_id = match user.to_user_id() {
        Ok(id) => id,
        Err(e) => return validation_error_response(e),
    };

    match state
        .aggregator
        .submit_questionnaire(user_id, tags, command_metadata(&headers))
        .await
    {
        Ok(result) => (StatusCode::CREATED, Json(WeightsResponse::from(result))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /got_like
pub async fn add_like(
    state: State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReactionMessage>, JsonRejection>,
) -> Response {
    react(state, headers, body, ReactionKind::Like, ReactionAction::Add).await
}

/// POST /cancel_like
pub async fn cancel_like(
    state: State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReactionMessage>, JsonRejection>,
) -> Response {
    react(state, headers, body, ReactionKind::Like, ReactionAction::Cancel).await
}

/// POST /got_fav
pub async fn add_favorite(
    state: State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReactionMessage>, JsonRejection>,
) -> Response {
    react(state, headers, body, ReactionKind::Favorite, ReactionAction::Add).await
}

/// POST /cancel_fav
pub async fn cancel_favorite(
    state: State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReactionMessage>, JsonRejection>,
) -> Response {
    react(
        state,
        headers,
        body,
        ReactionKind::Favorite,
        ReactionAction::Cancel,
    )
    .await
}

/// Shared body of the reaction routes. `[user_id, event_id]` is unpacked
/// into its two ids.
async fn react(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReactionMessage>, JsonRejection>,
    kind: ReactionKind,
    action: ReactionAction,
) -> Response {
    let Json((user, event)) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let (user_id, event_id) = match (user.to_user_id(), event.to_event_id()) {
        (Ok(user_id), Ok(event_id)) => (user_id, event_id),
        (Err(e), _) | (_, Err(e)) => return validation_error_response(e),
    };
    let user_key = user_id.to_string();

    match state
        .aggregator
        .react(user_id, event_id, kind, action, command_metadata(&headers))
        .await
    {
        Ok(Some(result)) => {
            (StatusCode::CREATED, Json(WeightsResponse::from(result))).into_response()
        }
        Ok(None) => (
            StatusCode::ACCEPTED,
            Json(ReactionNotAppliedResponse::new(user_key)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /get_weights/:id - Weight map, or `null` for an unknown user
pub async fn get_weights(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let user_id = match UserId::new(id) {
        Ok(id) => id,
        Err(e) => return validation_error_response(e),
    };

    match state.aggregator.get_weights(user_id).await {
        Ok(weights) => (StatusCode::OK, Json(weights)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
