//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProfileRepository` - Profiles with attendance/wishlist key arrays
//! - `PostgresConferenceRepository` - Conferences and filter-plan queries
//! - `PostgresSessionRepository` - Sessions scoped to their conference
//! - `PostgresRegistrationLedger` - Row-locked seat registration

mod conference_repository;
mod profile_repository;
mod registration_ledger;
mod session_repository;

pub use conference_repository::PostgresConferenceRepository;
pub use profile_repository::PostgresProfileRepository;
pub use registration_ledger::PostgresRegistrationLedger;
pub use session_repository::PostgresSessionRepository;

use crate::domain::foundation::DomainError;

/// Embedded schema migrations from `backend/migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    DomainError::database(format!("{}: {}", context, err))
}

fn corrupt_row(what: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::database(format!("Stored {} is invalid: {}", what, detail))
}
