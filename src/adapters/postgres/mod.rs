//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresInterestRepository` - Versioned interest records
//! - `PostgresPreferenceRepository` - Boolean preference flags
//!
//! The schema lives in `migrations/` and is applied with `run_migrations`.

mod interest_repository;
mod preference_repository;

pub use interest_repository::PostgresInterestRepository;
pub use preference_repository::PostgresPreferenceRepository;

use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to run migrations: {}", e),
        )
    })
}
