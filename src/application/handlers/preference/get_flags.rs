//! GetFlags - Query handler returning a user's preference flags.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::PreferenceRepository;

#[derive(Debug, Clone)]
pub struct GetFlagsQuery {
    pub user_id: UserId,
}

/// Returns `None` when the user never saved flags.
pub struct GetFlagsHandler {
    repository: Arc<dyn PreferenceRepository>,
}

impl GetFlagsHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetFlagsQuery) -> Result<Option<Vec<bool>>, DomainError> {
        let record = self.repository.find(&query.user_id).await?;
        Ok(record.map(|r| r.into_flags()))
    }
}
