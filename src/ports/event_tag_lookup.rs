//! EventTagLookup port - resolves the tags of a catalog event.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId};

/// Lookup of the tags attached to an event.
///
/// Unknown events and transport failures are errors; the aggregator does
/// not recover from them.
#[async_trait]
pub trait EventTagLookup: Send + Sync {
    async fn tags_for_event(&self, event_id: &EventId) -> Result<Vec<String>, DomainError>;
}
