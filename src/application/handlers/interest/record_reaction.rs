//! RecordReaction - Command handler folding a like/favorite (or its
//! cancellation) into a record.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{CommandMetadata, DomainError, EventId, UserId};
use crate::domain::interest::{
    FoldWeights, InterestRecord, ReactionAction, ReactionKind, RecordLookup, TagWeights,
};
use crate::ports::{EventPublisher, EventTagLookup, InterestRepository, SaveOutcome};

use super::{attempts_exhausted, publish_weights, DEFAULT_MAX_FOLD_ATTEMPTS};

/// Command describing one reaction on one event.
#[derive(Debug, Clone)]
pub struct RecordReactionCommand {
    pub user_id: UserId,
    pub event_id: EventId,
    pub kind: ReactionKind,
    pub action: ReactionAction,
}

/// Result of a folded reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReactionResult {
    pub user_id: UserId,
    pub tags: TagWeights,
}

/// Handler for reactions.
///
/// A reaction is never the first signal for a user: without an existing
/// record the handler returns `Ok(None)` and writes nothing.
pub struct RecordReactionHandler {
    repository: Arc<dyn InterestRepository>,
    tag_lookup: Arc<dyn EventTagLookup>,
    event_publisher: Arc<dyn EventPublisher>,
    weights: FoldWeights,
    max_attempts: u32,
}

impl RecordReactionHandler {
    pub fn new(
        repository: Arc<dyn InterestRepository>,
        tag_lookup: Arc<dyn EventTagLookup>,
        event_publisher: Arc<dyn EventPublisher>,
        weights: FoldWeights,
    ) -> Self {
        Self {
            repository,
            tag_lookup,
            event_publisher,
            weights,
            max_attempts: DEFAULT_MAX_FOLD_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn handle(
        &self,
        cmd: RecordReactionCommand,
        metadata: CommandMetadata,
    ) -> Result<Option<RecordReactionResult>, DomainError> {
        let Some(mut record) = self.load(&cmd.user_id).await? else {
            info!(
                user_id = %cmd.user_id,
                kind = %cmd.kind,
                action = %cmd.action,
                "User has no interest record yet; reaction ignored"
            );
            return Ok(None);
        };

        let event_tags = self.tag_lookup.tags_for_event(&cmd.event_id).await?;

        let mut attempt = 1;
        loop {
            record.apply_reaction(&event_tags, cmd.kind, cmd.action, &self.weights);

            match self.repository.save(&record).await? {
                SaveOutcome::Saved => break,
                SaveOutcome::Conflict if attempt < self.max_attempts => {
                    debug!(user_id = %cmd.user_id, attempt, "Reaction write conflicted, retrying");
                    attempt += 1;
                    record = match self.load(&cmd.user_id).await? {
                        Some(record) => record,
                        None => {
                            warn!(user_id = %cmd.user_id, "Interest record disappeared during fold");
                            return Ok(None);
                        }
                    };
                }
                SaveOutcome::Conflict => {
                    return Err(attempts_exhausted(&cmd.user_id, self.max_attempts));
                }
            }
        }

        debug!(
            user_id = %cmd.user_id,
            event_id = %cmd.event_id,
            kind = %cmd.kind,
            action = %cmd.action,
            count_changes = record.count_changes(),
            "Reaction folded"
        );

        publish_weights(
            self.event_publisher.as_ref(),
            &cmd.user_id,
            record.tags(),
            &metadata,
        )
        .await;

        Ok(Some(RecordReactionResult {
            user_id: cmd.user_id,
            tags: record.into_tags(),
        }))
    }

    async fn load(&self, user_id: &UserId) -> Result<Option<InterestRecord>, DomainError> {
        Ok(self.repository.find(user_id).await?.into_option())
    }
}
