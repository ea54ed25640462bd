//! ReactionEventHandler - folds reaction events from the listener.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::wire::ReactionMessage;
use crate::application::InterestAggregator;
use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope};
use crate::domain::interest::{ReactionAction, ReactionKind};
use crate::ports::EventHandler;

/// Maps a reaction channel to the reaction it carries.
pub fn reaction_for_channel(channel: &str) -> Option<(ReactionKind, ReactionAction)> {
    match channel {
        "likes.like" => Some((ReactionKind::Like, ReactionAction::Add)),
        "likes.like_cancel" => Some((ReactionKind::Like, ReactionAction::Cancel)),
        "favorites.fav" => Some((ReactionKind::Favorite, ReactionAction::Add)),
        "favorites.fav_cancel" => Some((ReactionKind::Favorite, ReactionAction::Cancel)),
        _ => None,
    }
}

pub struct ReactionEventHandler {
    aggregator: Arc<InterestAggregator>,
}

impl ReactionEventHandler {
    pub fn new(aggregator: Arc<InterestAggregator>) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl EventHandler for ReactionEventHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let (kind, action) = reaction_for_channel(&event.event_type).ok_or_else(|| {
            DomainError::validation(
                "event_type",
                format!("Not a reaction event: {}", event.event_type),
            )
        })?;

        let (user, target): ReactionMessage = event.payload_as().map_err(|e| {
            DomainError::validation("payload", format!("Expected [user_id, event_id]: {}", e))
        })?;

        let metadata = CommandMetadata::new()
            .with_correlation_id(event.message_id.as_str())
            .with_source("event");

        self.aggregator
            .react(
                user.to_user_id()?,
                target.to_event_id()?,
                kind,
                action,
                metadata,
            )
            .await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ReactionEventHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::logging::TracingActivityLogger;
    use crate::adapters::memory::{InMemoryInterestRepository, InMemoryPreferenceRepository};
    use crate::application::{AggregatorPorts, AggregatorSettings};
    use crate::domain::foundation::{ErrorCode, EventId, UserId};
    use crate::ports::{EventPublisher, EventSubscriber, EventTagLookup};
    use serde_json::json;

    struct FixedTagLookup;

    #[async_trait]
    impl EventTagLookup for FixedTagLookup {
        async fn tags_for_event(&self, _event_id: &EventId) -> Result<Vec<String>, DomainError> {
            Ok(vec!["x".to_string()])
        }
    }

    async fn wired() -> (Arc<InterestAggregator>, Arc<InMemoryEventBus>) {
        let ranking = Arc::new(InMemoryEventBus::new());
        let aggregator = Arc::new(InterestAggregator::new(
            AggregatorPorts {
                interests: Arc::new(InMemoryInterestRepository::new()),
                preferences: Arc::new(InMemoryPreferenceRepository::new()),
                tag_lookup: Arc::new(FixedTagLookup),
                event_publisher: ranking.clone(),
                activity_logger: Arc::new(TracingActivityLogger),
            },
            AggregatorSettings::default(),
        ));
        aggregator
            .submit_questionnaire(
                UserId::new("u-1").unwrap(),
                vec!["y".to_string()],
                CommandMetadata::new(),
            )
            .await
            .unwrap();
        (aggregator, ranking)
    }

    #[test]
    fn maps_all_reaction_channels() {
        assert_eq!(
            reaction_for_channel("favorites.fav_cancel"),
            Some((ReactionKind::Favorite, ReactionAction::Cancel))
        );
        assert_eq!(reaction_for_channel("likes.unknown"), None);
    }

    #[tokio::test]
    async fn like_event_updates_weights() {
        let (aggregator, _ranking) = wired().await;
        let intake = InMemoryEventBus::new();
        intake.subscribe("likes.like", Arc::new(ReactionEventHandler::new(aggregator.clone())));

        intake
            .publish(EventEnvelope::new("likes.like", "u-1", "Reaction", json!(["u-1", 3])))
            .await
            .unwrap();

        let weights = aggregator
            .get_weights(UserId::new("u-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!((weights["x"] - 1.0 / 51.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected() {
        let (aggregator, ranking) = wired().await;
        let handler = ReactionEventHandler::new(aggregator);

        let err = handler
            .handle(EventEnvelope::new("likes.like", "u-1", "Reaction", json!({"user": 1})))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(ranking.event_count(), 1);
    }
}
