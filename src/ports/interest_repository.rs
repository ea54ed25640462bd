//! InterestRepository port for versioned interest record persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::interest::{InterestRecord, RecordLookup};

/// Outcome of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was written and its stored version bumped.
    Saved,
    /// Another writer got there first; the caller must reload and re-fold.
    Conflict,
}

/// Repository for interest records.
///
/// Writes are optimistic: a record with version 0 is inserted only if no
/// record exists for the user, any other record is written only if the
/// stored version still equals `record.version()`. Together with a
/// reload-and-retry loop in the caller this serializes read-modify-write
/// cycles per user without holding locks across collaborator calls.
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// Point lookup by user.
    async fn find(&self, user_id: &UserId) -> Result<RecordLookup, DomainError>;

    /// Conditionally insert or update the record.
    async fn save(&self, record: &InterestRecord) -> Result<SaveOutcome, DomainError>;
}
