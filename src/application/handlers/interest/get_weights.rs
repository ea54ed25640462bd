//! GetWeights - Query handler returning a user's tag weights.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::interest::TagWeights;
use crate::ports::InterestRepository;

/// Query for a user's current weights.
#[derive(Debug, Clone)]
pub struct GetWeightsQuery {
    pub user_id: UserId,
}

/// Handler for weight lookups. `None` means the user has no record.
pub struct GetWeightsHandler {
    repository: Arc<dyn InterestRepository>,
}

impl GetWeightsHandler {
    pub fn new(repository: Arc<dyn InterestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWeightsQuery) -> Result<Option<TagWeights>, DomainError> {
        let lookup = self.repository.find(&query.user_id).await?;
        Ok(lookup.into_option().map(|record| record.into_tags()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryInterestRepository;
    use crate::domain::interest::{FoldWeights, InterestRecord};

    #[tokio::test]
    async fn returns_none_for_unknown_user() {
        let handler = GetWeightsHandler::new(Arc::new(InMemoryInterestRepository::new()));

        let result = handler
            .handle(GetWeightsQuery {
                user_id: UserId::new("nobody").unwrap(),
            })
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn returns_stored_weights() {
        let repo = Arc::new(InMemoryInterestRepository::new());
        let user_id = UserId::new("u-1").unwrap();
        repo.insert_record(InterestRecord::from_first_questionnaire(
            user_id.clone(),
            vec!["jazz".to_string()],
            &FoldWeights::default(),
        ));
        let handler = GetWeightsHandler::new(repo);

        let tags = handler
            .handle(GetWeightsQuery { user_id })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(tags.get("jazz"), Some(&1.0));
    }
}
