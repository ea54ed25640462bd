//! In-memory PreferenceRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::preference::BoolPreferenceRecord;
use crate::ports::PreferenceRepository;

#[derive(Debug, Default)]
pub struct InMemoryPreferenceRepository {
    records: Mutex<HashMap<UserId, Vec<bool>>>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn find(&self, user_id: &UserId) -> Result<Option<BoolPreferenceRecord>, DomainError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .get(user_id)
            .map(|flags| BoolPreferenceRecord::new(user_id.clone(), flags.clone())))
    }

    async fn upsert(&self, record: &BoolPreferenceRecord) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.user_id().clone(), record.flags().to_vec());
        Ok(())
    }
}
