use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionKey, UserId};
use crate::domain::profile::{Profile, TeeShirtSize};
use crate::ports::ProfileRepository;

use super::InMemoryStore;

fn profile_not_found(user_id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::ProfileNotFound, "Profile does not exist")
        .with_detail("user_id", user_id.as_str())
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.state.read().await.profiles.get(user_id).cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        if state.profiles.contains_key(&profile.user_id) {
            return Ok(false);
        }
        state
            .profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(true)
    }

    async fn update_details(
        &self,
        user_id: &UserId,
        display_name: &str,
        tee_shirt_size: TeeShirtSize,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let stored = state
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| profile_not_found(user_id))?;
        stored.display_name = display_name.to_string();
        stored.tee_shirt_size = tee_shirt_size;
        Ok(())
    }

    async fn add_to_wishlist(
        &self,
        user_id: &UserId,
        session: &SessionKey,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let stored = state
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| profile_not_found(user_id))?;
        Ok(stored.add_to_wishlist(session.clone()).is_ok())
    }
}
