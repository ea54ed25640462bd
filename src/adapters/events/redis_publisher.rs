//! Redis pub/sub publisher for ranking notifications.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Publishes each envelope as JSON on a single channel.
#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: MultiplexedConnection,
    channel: String,
}

impl RedisEventPublisher {
    pub fn new(conn: MultiplexedConnection, channel: impl Into<String>) -> Self {
        Self {
            conn,
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let body = serde_json::to_string(&event).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize event: {}", e),
            )
        })?;

        let mut conn = self.conn.clone();
        let receivers: i64 = conn
            .publish(&self.channel, body)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::new(ErrorCode::CacheError, format!("Redis publish failed: {}", e))
            })?;

        debug!(
            channel = %self.channel,
            event_type = %event.event_type,
            receivers,
            "Event published"
        );
        Ok(())
    }
}
