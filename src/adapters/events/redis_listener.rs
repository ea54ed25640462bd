//! Redis pub/sub listener feeding reaction events to handlers.
//!
//! Each message on a subscribed channel becomes an `EventEnvelope` whose
//! `event_type` is the channel name and whose payload is the message JSON.

use futures::StreamExt;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventSubscriber};

/// Channels carrying reactions from the likes and favorites services.
pub const REACTION_CHANNELS: [&str; 4] = [
    "likes.like",
    "likes.like_cancel",
    "favorites.fav",
    "favorites.fav_cancel",
];

pub struct RedisEventListener {
    client: redis::Client,
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
}

impl RedisEventListener {
    pub fn new(client: redis::Client) -> Self {
        Self {
            client,
            handlers: RwLock::new(HashMap::new()),
        }
    }

    fn channels(&self) -> Vec<String> {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let mut channels: Vec<String> = handlers.keys().cloned().collect();
        channels.sort();
        channels
    }

    /// Subscribes to every channel with a registered handler and dispatches
    /// messages until `shutdown` flips to true or its sender is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), DomainError> {
        let channels = self.channels();
        if channels.is_empty() {
            warn!("No reaction handlers registered; listener not started");
            return Ok(());
        }

        let conn = self
            .client
            .get_async_connection()
            .await
            .map_err(redis_error)?;
        let mut pubsub = conn.into_pubsub();
        for channel in &channels {
            pubsub.subscribe(channel).await.map_err(redis_error)?;
        }
        info!(channels = ?channels, "Listening for reaction events");

        let messages = pubsub.on_message();
        tokio::pin!(messages);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Reaction listener shutting down");
                        return Ok(());
                    }
                }
                message = messages.next() => {
                    let Some(message) = message else {
                        return Err(DomainError::new(
                            ErrorCode::CacheError,
                            "Redis pub/sub connection closed",
                        ));
                    };
                    match message.get_payload::<String>() {
                        Ok(payload) => self.dispatch(message.get_channel_name(), &payload).await,
                        Err(e) => warn!(
                            channel = message.get_channel_name(),
                            error = %e,
                            "Dropping non-text reaction message"
                        ),
                    }
                }
            }
        }
    }

    /// Delivers one raw message to the handlers of its channel.
    ///
    /// Malformed payloads and handler failures are logged and dropped.
    pub async fn dispatch(&self, channel: &str, payload: &str) {
        let value: serde_json::Value = match serde_json::from_str(payload) {
            Ok(value) => value,
            Err(e) => {
                warn!(channel, error = %e, "Dropping malformed reaction message");
                return;
            }
        };

        let aggregate_id = value
            .get(0)
            .map(|id| match id {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default();
        let envelope =
            EventEnvelope::new(channel, aggregate_id, "Reaction", value).with_source("event");

        let channel_handlers: Vec<Arc<dyn EventHandler>> = {
            let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
            handlers.get(channel).cloned().unwrap_or_default()
        };

        for handler in channel_handlers {
            match handler.handle(envelope.clone()).await {
                Ok(()) => debug!(channel, handler = handler.name(), "Reaction handled"),
                Err(e) => warn!(
                    channel,
                    handler = handler.name(),
                    error = %e,
                    "Reaction handler failed"
                ),
            }
        }
    }
}

impl EventSubscriber for RedisEventListener {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }
}

fn redis_error(e: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("Redis subscribe failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        seen: Mutex<Vec<EventEnvelope>>,
    }

    #[async_trait]
    impl EventHandler for RecordingHandler {
        async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
            self.seen.lock().unwrap().push(event);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "RecordingHandler"
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler for FailingHandler {
        async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "boom"))
        }

        fn name(&self) -> &'static str {
            "FailingHandler"
        }
    }

    fn listener() -> RedisEventListener {
        RedisEventListener::new(redis::Client::open("redis://127.0.0.1:6379/").unwrap())
    }

    #[tokio::test]
    async fn dispatch_wraps_payload_in_envelope() {
        let listener = listener();
        let handler = Arc::new(RecordingHandler::default());
        listener.subscribe_all(&REACTION_CHANNELS, handler.clone());

        listener.dispatch("likes.like", r#"["u-1", 12]"#).await;

        let seen = handler.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].event_type, "likes.like");
        assert_eq!(seen[0].aggregate_id, "u-1");
        assert_eq!(seen[0].payload[1], 12);
        assert_eq!(seen[0].metadata.source.as_deref(), Some("event"));
    }

    #[tokio::test]
    async fn dispatch_ignores_unsubscribed_channels_and_bad_json() {
        let listener = listener();
        let handler = Arc::new(RecordingHandler::default());
        listener.subscribe("favorites.fav", handler.clone());

        listener.dispatch("likes.like", r#"["u-1", "e-1"]"#).await;
        listener.dispatch("favorites.fav", "not json").await;

        assert!(handler.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_handler_does_not_block_others() {
        let listener = listener();
        let handler = Arc::new(RecordingHandler::default());
        listener.subscribe("likes.like", Arc::new(FailingHandler));
        listener.subscribe("likes.like", handler.clone());

        listener.dispatch("likes.like", r#"["u-1", "e-1"]"#).await;

        assert_eq!(handler.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn channels_are_those_with_handlers() {
        let listener = listener();
        listener.subscribe_all(
            &["likes.like", "favorites.fav"],
            Arc::new(RecordingHandler::default()),
        );

        assert_eq!(listener.channels(), vec!["favorites.fav", "likes.like"]);
    }

    #[tokio::test]
    async fn run_without_handlers_returns_immediately() {
        let (_tx, rx) = watch::channel(false);
        assert!(listener().run(rx).await.is_ok());
    }
}
