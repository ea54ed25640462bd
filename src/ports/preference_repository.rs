//! PreferenceRepository port for boolean preference flags.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::preference::BoolPreferenceRecord;

/// Repository for preference flag lists.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Point lookup by user.
    async fn find(&self, user_id: &UserId) -> Result<Option<BoolPreferenceRecord>, DomainError>;

    /// Create or fully overwrite the user's flags (last write wins).
    async fn upsert(&self, record: &BoolPreferenceRecord) -> Result<(), DomainError>;
}
