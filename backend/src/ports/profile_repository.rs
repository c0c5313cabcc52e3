//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionKey, UserId};
use crate::domain::profile::{Profile, TeeShirtSize};

/// Persistence for user profiles, keyed by user id.
///
/// The attendance list belongs to `RegistrationLedger`. Nothing here writes
/// it after the profile is first stored, so a profile edit can never undo a
/// registration that committed in between.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns `None` if the user has never been seen.
    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Stores a new profile. Returns `false` and leaves the stored one as is
    /// when the user already has a profile.
    async fn create(&self, profile: &Profile) -> Result<bool, DomainError>;

    /// Overwrites only the editable fields.
    async fn update_details(
        &self,
        user_id: &UserId,
        display_name: &str,
        tee_shirt_size: TeeShirtSize,
    ) -> Result<(), DomainError>;

    /// Appends `session` to the wishlist in one step. Returns `false` when it
    /// is already there.
    async fn add_to_wishlist(&self, user_id: &UserId, session: &SessionKey)
        -> Result<bool, DomainError>;
}
