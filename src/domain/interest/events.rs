//! Events emitted by the interest aggregator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp, UserId};

use super::weights::TagWeights;

/// Published after every successful fold so the ranking service can
/// reorder the user's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsUpdated {
    pub message_id: MessageId,
    pub user_id: UserId,
    pub tags: TagWeights,
    pub occurred_at: Timestamp,
}

impl WeightsUpdated {
    pub fn new(user_id: UserId, tags: TagWeights) -> Self {
        Self {
            message_id: MessageId::new(),
            user_id,
            tags,
            occurred_at: Timestamp::now(),
        }
    }
}

crate::domain_event!(
    WeightsUpdated,
    event_type = "interest.weights_updated.v1",
    aggregate_id = user_id,
    aggregate_type = "InterestRecord",
    occurred_at = occurred_at,
    message_id = message_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};

    #[test]
    fn envelope_carries_user_and_tags() {
        let mut tags = TagWeights::new();
        tags.insert("music".to_string(), 0.75);
        let event = WeightsUpdated::new(UserId::new("u-9").unwrap(), tags);

        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(event.event_type(), "interest.weights_updated.v1");
        assert_eq!(envelope.aggregate_id, "u-9");
        assert_eq!(envelope.payload["user_id"], "u-9");
        assert_eq!(envelope.payload["tags"]["music"], 0.75);
    }
}
