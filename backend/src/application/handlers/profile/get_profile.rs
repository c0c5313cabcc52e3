//! GetProfileHandler - Query handler for the caller's profile.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Returns the caller's profile, creating and storing it on first access.
pub async fn load_or_create_profile(
    profiles: &dyn ProfileRepository,
    user: &AuthenticatedUser,
) -> Result<Profile, DomainError> {
    if let Some(profile) = profiles.find(&user.id).await? {
        return Ok(profile);
    }

    let profile = Profile::for_user(user);
    if profiles.create(&profile).await? {
        tracing::info!(user_id = %user.id, "Profile created");
        return Ok(profile);
    }
    // Lost a first-access race; the other request's row wins.
    Ok(profiles.find(&user.id).await?.unwrap_or(profile))
}

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user: AuthenticatedUser,
}

pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Profile, ProfileError> {
        Ok(load_or_create_profile(self.profiles.as_ref(), &query.user).await?)
    }
}
