//! SubmitQuestionnaire - Command handler folding a questionnaire into a record.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError, UserId};
use crate::domain::interest::{FoldWeights, InterestRecord, RecordLookup, TagWeights};
use crate::ports::{EventPublisher, InterestRepository, SaveOutcome};

use super::{attempts_exhausted, publish_weights, DEFAULT_MAX_FOLD_ATTEMPTS};

/// Command carrying a user's questionnaire answers as tags.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireCommand {
    pub user_id: UserId,
    pub tags: Vec<String>,
}

/// Result of a folded questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitQuestionnaireResult {
    pub user_id: UserId,
    pub tags: TagWeights,
    /// True when this questionnaire created the record.
    pub created: bool,
}

/// Handler creating a record from a first questionnaire, or replacing the
/// previous questionnaire's influence on an existing one.
pub struct SubmitQuestionnaireHandler {
    repository: Arc<dyn InterestRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    weights: FoldWeights,
    max_attempts: u32,
}

impl SubmitQuestionnaireHandler {
    pub fn new(
        repository: Arc<dyn InterestRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        weights: FoldWeights,
    ) -> Self {
        Self {
            repository,
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
        cmd: SubmitQuestionnaireCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitQuestionnaireResult, DomainError> {
        for attempt in 1..=self.max_attempts {
            let (record, created) = match self.repository.find(&cmd.user_id).await? {
                RecordLookup::NotFound => (
                    InterestRecord::from_first_questionnaire(
                        cmd.user_id.clone(),
                        cmd.tags.clone(),
                        &self.weights,
                    ),
                    true,
                ),
                RecordLookup::Found(mut record) => {
                    record.replace_questionnaire(cmd.tags.clone(), &self.weights);
                    (record, false)
                }
            };

            match self.repository.save(&record).await? {
                SaveOutcome::Saved => {
                    debug!(user_id = %cmd.user_id, created, "Questionnaire folded");
                    publish_weights(
                        self.event_publisher.as_ref(),
                        &cmd.user_id,
                        record.tags(),
                        &metadata,
                    )
                    .await;

                    return Ok(SubmitQuestionnaireResult {
                        user_id: cmd.user_id,
                        tags: record.into_tags(),
                        created,
                    });
                }
                SaveOutcome::Conflict => {
                    debug!(user_id = %cmd.user_id, attempt, "Questionnaire write conflicted, retrying");
                }
            }
        }

        Err(attempts_exhausted(&cmd.user_id, self.max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryInterestRepository;
    use crate::domain::foundation::{ErrorCode, EventEnvelope};
    use async_trait::async_trait;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn handler(
        repo: Arc<dyn InterestRepository>,
        bus: Arc<InMemoryEventBus>,
    ) -> SubmitQuestionnaireHandler {
        SubmitQuestionnaireHandler::new(repo, bus, FoldWeights::default())
    }

    struct AlwaysConflictingRepository;

    #[async_trait]
    impl InterestRepository for AlwaysConflictingRepository {
        async fn find(&self, _user_id: &UserId) -> Result<RecordLookup, DomainError> {
            Ok(RecordLookup::NotFound)
        }

        async fn save(&self, _record: &InterestRecord) -> Result<SaveOutcome, DomainError> {
            Ok(SaveOutcome::Conflict)
        }
    }

    struct FailingPublisher;

    #[async_trait]
    impl EventPublisher for FailingPublisher {
        async fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::CacheError, "redis down"))
        }
    }

    #[tokio::test]
    async fn first_questionnaire_creates_record() {
        let repo = Arc::new(InMemoryInterestRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler(repo.clone(), bus.clone());

        let result = handler
            .handle(
                SubmitQuestionnaireCommand {
                    user_id: user(),
                    tags: tags(&["music", "sport"]),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert!(result.created);
        assert_eq!(result.tags.get("music"), Some(&1.0));
        assert_eq!(result.tags.get("sport"), Some(&1.0));

        let stored = repo.find(&user()).await.unwrap().into_option().unwrap();
        assert_eq!(stored.count_changes(), 50.0);
        assert_eq!(stored.version(), 1);
    }

    #[tokio::test]
    async fn second_questionnaire_replaces_first() {
        let repo = Arc::new(InMemoryInterestRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler(repo.clone(), bus.clone());

        for q in [tags(&["a", "b"]), tags(&["b", "c"])] {
            handler
                .handle(
                    SubmitQuestionnaireCommand {
                        user_id: user(),
                        tags: q,
                    },
                    CommandMetadata::new(),
                )
                .await
                .unwrap();
        }

        let stored = repo.find(&user()).await.unwrap().into_option().unwrap();
        assert_eq!(stored.weight_of("a"), 0.0);
        assert_eq!(stored.weight_of("b"), 1.0);
        assert_eq!(stored.weight_of("c"), 1.0);
        assert_eq!(stored.questionnaire_tags(), &tags(&["b", "c"])[..]);
        assert_eq!(stored.count_changes(), 50.0);
    }

    #[tokio::test]
    async fn publishes_weights_for_ranking() {
        let repo = Arc::new(InMemoryInterestRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler(repo, bus.clone());

        handler
            .handle(
                SubmitQuestionnaireCommand {
                    user_id: user(),
                    tags: tags(&["music"]),
                },
                CommandMetadata::new()
                    .with_correlation_id("corr-1")
                    .with_source("http"),
            )
            .await
            .unwrap();

        let events = bus.events_of_type("interest.weights_updated.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, "user-1");
        assert_eq!(events[0].payload["tags"]["music"], 1.0);
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("corr-1"));
        assert_eq!(events[0].metadata.source.as_deref(), Some("http"));
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_command() {
        let repo = Arc::new(InMemoryInterestRepository::new());
        let handler = SubmitQuestionnaireHandler::new(
            repo.clone(),
            Arc::new(FailingPublisher),
            FoldWeights::default(),
        );

        let result = handler
            .handle(
                SubmitQuestionnaireCommand {
                    user_id: user(),
                    tags: tags(&["music"]),
                },
                CommandMetadata::new(),
            )
            .await;

        assert!(result.is_ok());
        assert!(repo.find(&user()).await.unwrap().into_option().is_some());
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler(Arc::new(AlwaysConflictingRepository), bus.clone())
            .with_max_attempts(3);

        let err = handler
            .handle(
                SubmitQuestionnaireCommand {
                    user_id: user(),
                    tags: tags(&["music"]),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ConcurrentModification);
        assert_eq!(bus.event_count(), 0);
    }
}
