use async_trait::async_trait;

use crate::domain::conference::{apply_registration, ConferenceError, RegistrationAction};
use crate::domain::foundation::{ConferenceKey, DomainError, ErrorCode, UserId};
use crate::ports::RegistrationLedger;

use super::InMemoryStore;

#[async_trait]
impl RegistrationLedger for InMemoryStore {
    async fn apply(
        &self,
        user: &UserId,
        conference: &ConferenceKey,
        action: RegistrationAction,
    ) -> Result<bool, DomainError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let mut conf = state
            .conferences
            .get(conference)
            .cloned()
            .ok_or_else(|| ConferenceError::not_found(conference.to_websafe()))?;
        let mut profile = state.profiles.get(user).cloned().ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, "Profile does not exist")
                .with_detail("user_id", user.as_str())
        })?;

        let changed = apply_registration(&mut profile, &mut conf, action)?;
        if changed {
            state.conferences.insert(conf.key.clone(), conf);
            state.profiles.insert(profile.user_id.clone(), profile);
        }
        Ok(changed)
    }
}
