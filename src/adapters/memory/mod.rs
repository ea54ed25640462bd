//! In-memory persistence adapters.
//!
//! Used by tests and for running the service without Postgres.

mod interest_repository;
mod preference_repository;

pub use interest_repository::InMemoryInterestRepository;
pub use preference_repository::InMemoryPreferenceRepository;
