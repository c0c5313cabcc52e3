//! Registration ledger port.
//!
//! Registration touches two records: the user's profile and the conference.
//! Implementations load both, apply
//! [`apply_registration`](crate::domain::conference::apply_registration) and
//! write both back as one atomic unit, serializing concurrent registrations
//! for the same conference.

use async_trait::async_trait;

use crate::domain::conference::RegistrationAction;
use crate::domain::foundation::{ConferenceKey, DomainError, UserId};

#[async_trait]
pub trait RegistrationLedger: Send + Sync {
    /// Applies `action` for `user` on `conference`.
    ///
    /// # Errors
    ///
    /// - `ConferenceNotFound` if the conference does not exist
    /// - `ProfileNotFound` if the user has no profile yet
    /// - `AlreadyRegistered` / `NoSeatsAvailable` on conflicts
    /// - `DatabaseError` on persistence failure
    async fn apply(
        &self,
        user: &UserId,
        conference: &ConferenceKey,
        action: RegistrationAction,
    ) -> Result<bool, DomainError>;
}
