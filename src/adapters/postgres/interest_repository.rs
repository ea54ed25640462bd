//! PostgreSQL implementation of InterestRepository.
//!
//! Tags are stored as JSONB, questionnaire tags as `TEXT[]`. Every write is
//! conditional on the `version` column.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::interest::{InterestRecord, RecordLookup, TagWeights};
use crate::ports::{InterestRepository, SaveOutcome};

#[derive(Clone)]
pub struct PostgresInterestRepository {
    pool: PgPool,
}

impl PostgresInterestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_if_absent(&self, record: &InterestRecord) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO interest_records (user_id, tags, count_changes, q_tags, version)
            VALUES ($1, $2, $3, $4, 1)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(record.user_id().as_str())
        .bind(Json(record.tags()))
        .bind(record.count_changes())
        .bind(record.questionnaire_tags())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_if_current(&self, record: &InterestRecord) -> Result<u64, sqlx::Error> {
        let expected = i64::try_from(record.version()).unwrap_or(i64::MAX);
        let result = sqlx::query(
            r#"
            UPDATE interest_records SET
                tags = $2,
                count_changes = $3,
                q_tags = $4,
                version = version + 1,
                updated_at = NOW()
            WHERE user_id = $1 AND version = $5
            "#,
        )
        .bind(record.user_id().as_str())
        .bind(Json(record.tags()))
        .bind(record.count_changes())
        .bind(record.questionnaire_tags())
        .bind(expected)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl InterestRepository for PostgresInterestRepository {
    async fn find(&self, user_id: &UserId) -> Result<RecordLookup, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, tags, count_changes, q_tags, version
            FROM interest_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch interest record: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(RecordLookup::Found(row_to_record(row)?)),
            None => Ok(RecordLookup::NotFound),
        }
    }

    async fn save(&self, record: &InterestRecord) -> Result<SaveOutcome, DomainError> {
        let written = if record.is_persisted() {
            self.update_if_current(record).await
        } else {
            self.insert_if_absent(record).await
        }
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save interest record: {}", e),
            )
        })?;

        Ok(if written == 0 {
            SaveOutcome::Conflict
        } else {
            SaveOutcome::Saved
        })
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn row_to_record(row: PgRow) -> Result<InterestRecord, DomainError> {
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let Json(tags): Json<TagWeights> = row.try_get("tags").map_err(|e| column_error("tags", e))?;
    let count_changes: f64 = row
        .try_get("count_changes")
        .map_err(|e| column_error("count_changes", e))?;
    let q_tags: Vec<String> = row.try_get("q_tags").map_err(|e| column_error("q_tags", e))?;
    let version: i64 = row.try_get("version").map_err(|e| column_error("version", e))?;

    Ok(InterestRecord::reconstitute(
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        tags,
        count_changes,
        q_tags,
        u64::try_from(version).unwrap_or_default(),
    ))
}
