//! PostgreSQL implementation of PreferenceRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::preference::BoolPreferenceRecord;
use crate::ports::PreferenceRepository;

#[derive(Clone)]
pub struct PostgresPreferenceRepository {
    pool: PgPool,
}

impl PostgresPreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for PostgresPreferenceRepository {
    async fn find(&self, user_id: &UserId) -> Result<Option<BoolPreferenceRecord>, DomainError> {
        let row: Option<(Vec<bool>,)> =
            sqlx::query_as("SELECT bool_list FROM bool_preferences WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to fetch preference flags: {}", e),
                    )
                })?;

        Ok(row.map(|(flags,)| BoolPreferenceRecord::new(user_id.clone(), flags)))
    }

    async fn upsert(&self, record: &BoolPreferenceRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bool_preferences (user_id, bool_list)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET
                bool_list = EXCLUDED.bool_list,
                updated_at = NOW()
            "#,
        )
        .bind(record.user_id().as_str())
        .bind(record.flags())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save preference flags: {}", e),
            )
        })?;

        Ok(())
    }
}
