//! Conference repository port.
//!
//! Conferences are written once at creation. Seat counts change only through
//! the `RegistrationLedger`.

use async_trait::async_trait;

use crate::domain::conference::{Conference, QueryPlan};
use crate::domain::foundation::{ConferenceKey, DomainError, UserId};

#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    async fn create(&self, conference: &Conference) -> Result<(), DomainError>;

    /// Returns `None` if the key does not resolve.
    async fn find(&self, key: &ConferenceKey) -> Result<Option<Conference>, DomainError>;

    /// Batch lookup. Keys that do not resolve are skipped; order follows `keys`.
    async fn find_many(&self, keys: &[ConferenceKey]) -> Result<Vec<Conference>, DomainError>;

    /// Conferences organized by `organizer`, ordered by name.
    async fn find_by_organizer(&self, organizer: &UserId) -> Result<Vec<Conference>, DomainError>;

    /// Runs a compiled filter plan, honoring its ordering.
    async fn query(&self, plan: &QueryPlan) -> Result<Vec<Conference>, DomainError>;
}
