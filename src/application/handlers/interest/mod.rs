//! Interest application handlers.
//!
//! Command and query handlers that fold signals into interest records.
//! Every write is an optimistic read-modify-write: on `SaveOutcome::Conflict`
//! the handler reloads the record and folds again, at most
//! `max_attempts` times.

mod get_weights;
mod record_reaction;
mod submit_questionnaire;

pub use get_weights::{GetWeightsHandler, GetWeightsQuery};
pub use record_reaction::{RecordReactionCommand, RecordReactionHandler, RecordReactionResult};
pub use submit_questionnaire::{
    SubmitQuestionnaireCommand, SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
};

use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, EventEnvelope, UserId,
};
use crate::domain::interest::{TagWeights, WeightsUpdated};
use crate::ports::EventPublisher;

/// Default bound on optimistic write attempts per fold.
pub const DEFAULT_MAX_FOLD_ATTEMPTS: u32 = 5;

/// Notifies the ranking service of a user's new weights.
///
/// Best-effort: failures are logged and never fail the fold that was
/// already persisted.
async fn publish_weights(
    publisher: &dyn EventPublisher,
    user_id: &UserId,
    tags: &TagWeights,
    metadata: &CommandMetadata,
) {
    let event = WeightsUpdated::new(user_id.clone(), tags.clone());
    let mut envelope = match EventEnvelope::from_event(&event) {
        Ok(envelope) => envelope.with_correlation_id(metadata.correlation_id()),
        Err(e) => {
            tracing::warn!(user_id = %user_id, error = %e, "Failed to serialize weights update");
            return;
        }
    };
    if let Some(source) = metadata.source() {
        envelope = envelope.with_source(source);
    }

    if let Err(e) = publisher.publish(envelope).await {
        tracing::warn!(user_id = %user_id, error = %e, "Failed to notify ranking of new weights");
    }
}

fn attempts_exhausted(user_id: &UserId, attempts: u32) -> DomainError {
    DomainError::new(
        ErrorCode::ConcurrentModification,
        format!(
            "Interest record for user {} kept changing; gave up after {} attempts",
            user_id, attempts
        ),
    )
    .with_detail("user_id", user_id.to_string())
}
