//! In-memory InterestRepository with the same versioning rules as Postgres.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::interest::{InterestRecord, RecordLookup};
use crate::ports::{InterestRepository, SaveOutcome};

/// Versioned record map guarded by a single mutex.
#[derive(Debug, Default)]
pub struct InMemoryInterestRepository {
    records: Mutex<HashMap<UserId, InterestRecord>>,
    writes: AtomicUsize,
}

impl InMemoryInterestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Seeds a record directly, bypassing version checks.
    ///
    /// A record with version 0 is stored as version 1 so that it behaves as
    /// already persisted.
    pub fn insert_record(&self, record: InterestRecord) {
        let version = record.version().max(1);
        let stored = with_version(&record, version);
        self.lock().insert(stored.user_id().clone(), stored);
    }

    /// Number of successful `save` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, InterestRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn with_version(record: &InterestRecord, version: u64) -> InterestRecord {
    InterestRecord::reconstitute(
        record.user_id().clone(),
        record.tags().clone(),
        record.count_changes(),
        record.questionnaire_tags().to_vec(),
        version,
    )
}

#[async_trait]
impl InterestRepository for InMemoryInterestRepository {
    async fn find(&self, user_id: &UserId) -> Result<RecordLookup, DomainError> {
        Ok(match self.lock().get(user_id) {
            Some(record) => RecordLookup::Found(record.clone()),
            None => RecordLookup::NotFound,
        })
    }

    async fn save(&self, record: &InterestRecord) -> Result<SaveOutcome, DomainError> {
        let mut records = self.lock();
        let current = records.get(record.user_id()).map(|r| r.version());

        let next_version = match (record.is_persisted(), current) {
            (false, None) => 1,
            (true, Some(stored)) if stored == record.version() => stored + 1,
            _ => return Ok(SaveOutcome::Conflict),
        };

        records.insert(record.user_id().clone(), with_version(record, next_version));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(SaveOutcome::Saved)
    }
}
