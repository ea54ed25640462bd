//! EventPublisher port - Interface for publishing events.
//!
//! The aggregator publishes weight updates for the ranking service without
//! knowing about the transport (Redis pub/sub, in-memory, ...).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing events.
///
/// Delivery is best-effort from the aggregator's point of view: callers log
/// publish failures instead of failing the command that produced the event.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}
}
