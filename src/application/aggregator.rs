//! InterestAggregator - the boundary operations of the service.
//!
//! HTTP routes and the reaction listener both call through this facade, so
//! each operation reports to the activity log the same way regardless of
//! how it arrived.

use std::sync::Arc;

use serde_json::json;

use crate::domain::foundation::{CommandMetadata, DomainError, EventId, UserId};
use crate::domain::interest::{FoldWeights, ReactionAction, ReactionKind, TagWeights};
use crate::ports::{
    ActivityLogEntry, ActivityLogger, EventPublisher, EventTagLookup, InterestRepository,
    PreferenceRepository,
};

use super::handlers::{
    GetFlagsHandler, GetFlagsQuery, GetWeightsHandler, GetWeightsQuery, RecordReactionCommand,
    RecordReactionHandler, RecordReactionResult, SaveFlagsCommand, SaveFlagsHandler,
    SubmitQuestionnaireCommand, SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
    DEFAULT_MAX_FOLD_ATTEMPTS,
};

/// Collaborators the aggregator is wired with.
#[derive(Clone)]
pub struct AggregatorPorts {
    pub interests: Arc<dyn InterestRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
    pub tag_lookup: Arc<dyn EventTagLookup>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub activity_logger: Arc<dyn ActivityLogger>,
}

/// Immutable tuning applied at construction.
#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    pub weights: FoldWeights,
    pub max_fold_attempts: u32,
    /// Name reported to the activity log.
    pub service_name: String,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            weights: FoldWeights::default(),
            max_fold_attempts: DEFAULT_MAX_FOLD_ATTEMPTS,
            service_name: "interest-aggregator".to_string(),
        }
    }
}

pub struct InterestAggregator {
    submit_questionnaire: SubmitQuestionnaireHandler,
    record_reaction: RecordReactionHandler,
    get_weights: GetWeightsHandler,
    save_flags: SaveFlagsHandler,
    get_flags: GetFlagsHandler,
    activity_logger: Arc<dyn ActivityLogger>,
    service_name: String,
}

impl InterestAggregator {
    pub fn new(ports: AggregatorPorts, settings: AggregatorSettings) -> Self {
        Self {
            submit_questionnaire: SubmitQuestionnaireHandler::new(
                ports.interests.clone(),
                ports.event_publisher.clone(),
                settings.weights,
            )
            .with_max_attempts(settings.max_fold_attempts),
            record_reaction: RecordReactionHandler::new(
                ports.interests.clone(),
                ports.tag_lookup,
                ports.event_publisher,
                settings.weights,
            )
            .with_max_attempts(settings.max_fold_attempts),
            get_weights: GetWeightsHandler::new(ports.interests),
            save_flags: SaveFlagsHandler::new(ports.preferences.clone()),
            get_flags: GetFlagsHandler::new(ports.preferences),
            activity_logger: ports.activity_logger,
            service_name: settings.service_name,
        }
    }

    /// Folds a questionnaire into the user's record, creating it if needed.
    pub async fn submit_questionnaire(
        &self,
        user_id: UserId,
        tags: Vec<String>,
        metadata: CommandMetadata,
    ) -> Result<SubmitQuestionnaireResult, DomainError> {
        self.activity_logger.log(ActivityLogEntry::info(
            &self.service_name,
            "create_new_q",
            json!([user_id.as_str(), &tags]),
            "Creating questionnaire",
        ));

        self.submit_questionnaire
            .handle(SubmitQuestionnaireCommand { user_id, tags }, metadata)
            .await
    }

    /// Folds one reaction. `Ok(None)` when the user has no record yet.
    pub async fn react(
        &self,
        user_id: UserId,
        event_id: EventId,
        kind: ReactionKind,
        action: ReactionAction,
        metadata: CommandMetadata,
    ) -> Result<Option<RecordReactionResult>, DomainError> {
        let (operation, message) = match (kind, action) {
            (ReactionKind::Like, ReactionAction::Add) => ("add_like", "Saving like"),
            (ReactionKind::Like, ReactionAction::Cancel) => ("cancel_like", "Cancelling like"),
            (ReactionKind::Favorite, ReactionAction::Add) => ("add_fav", "Add to favorite"),
            (ReactionKind::Favorite, ReactionAction::Cancel) => {
                ("cancel_fav", "Cancelling favorite")
            }
        };
        self.activity_logger.log(ActivityLogEntry::info(
            &self.service_name,
            operation,
            json!([user_id.as_str(), event_id.as_str()]),
            message,
        ));

        self.record_reaction
            .handle(
                RecordReactionCommand {
                    user_id,
                    event_id,
                    kind,
                    action,
                },
                metadata,
            )
            .await
    }

    pub async fn add_like(
        &self,
        user_id: UserId,
        event_id: EventId,
        metadata: CommandMetadata,
    ) -> Result<Option<RecordReactionResult>, DomainError> {
        self.react(user_id, event_id, ReactionKind::Like, ReactionAction::Add, metadata)
            .await
    }

    pub async fn cancel_like(
        &self,
        user_id: UserId,
        event_id: EventId,
        metadata: CommandMetadata,
    ) -> Result<Option<RecordReactionResult>, DomainError> {
        self.react(user_id, event_id, ReactionKind::Like, ReactionAction::Cancel, metadata)
            .await
    }

    pub async fn add_favorite(
        &self,
        user_id: UserId,
        event_id: EventId,
        metadata: CommandMetadata,
    ) -> Result<Option<RecordReactionResult>, DomainError> {
        self.react(user_id, event_id, ReactionKind::Favorite, ReactionAction::Add, metadata)
            .await
    }

    pub async fn cancel_favorite(
        &self,
        user_id: UserId,
        event_id: EventId,
        metadata: CommandMetadata,
    ) -> Result<Option<RecordReactionResult>, DomainError> {
        self.react(
            user_id,
            event_id,
            ReactionKind::Favorite,
            ReactionAction::Cancel,
            metadata,
        )
        .await
    }

    pub async fn get_weights(&self, user_id: UserId) -> Result<Option<TagWeights>, DomainError> {
        self.get_weights.handle(GetWeightsQuery { user_id }).await
    }

    pub async fn set_flags(&self, user_id: UserId, flags: Vec<bool>) -> Result<(), DomainError> {
        self.save_flags
            .handle(SaveFlagsCommand { user_id, flags })
            .await
    }

    pub async fn get_flags(&self, user_id: UserId) -> Result<Option<Vec<bool>>, DomainError> {
        self.get_flags.handle(GetFlagsQuery { user_id }).await
    }
}
