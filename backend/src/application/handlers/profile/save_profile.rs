//! SaveProfileHandler - Command handler for editing the caller's profile.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::profile::{Profile, ProfileError, TeeShirtSize};
use crate::ports::ProfileRepository;

use super::load_or_create_profile;

/// Editable profile fields. `None` and blank values leave the field as is.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub user: AuthenticatedUser,
    pub display_name: Option<String>,
    pub tee_shirt_size: Option<TeeShirtSize>,
}

pub struct SaveProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl SaveProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<Profile, ProfileError> {
        let mut profile = load_or_create_profile(self.profiles.as_ref(), &cmd.user).await?;

        profile.update(cmd.display_name.as_deref(), cmd.tee_shirt_size);
        self.profiles
            .update_details(&profile.user_id, &profile.display_name, profile.tee_shirt_size)
            .await?;

        // Re-read so attendance committed since the load is reported.
        Ok(self.profiles.find(&profile.user_id).await?.unwrap_or(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::conference::{Conference, ConferenceDraft, RegistrationAction};
    use crate::domain::foundation::UserId;
    use crate::ports::{ConferenceRepository, RegistrationLedger};

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-1").unwrap(), "ada@example.com", None)
    }

    #[tokio::test]
    async fn updates_present_fields() {
        let store = Arc::new(InMemoryStore::new());
        let handler = SaveProfileHandler::new(store.clone());

        let profile = handler
            .handle(SaveProfileCommand {
                user: user(),
                display_name: Some("Ada".into()),
                tee_shirt_size: Some(TeeShirtSize::LW),
            })
            .await
            .unwrap();

        assert_eq!(profile.display_name, "Ada");
        assert_eq!(profile.tee_shirt_size, TeeShirtSize::LW);
        assert_eq!(ProfileRepository::find(store.as_ref(), &user().id).await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn empty_name_keeps_previous_value() {
        let store = Arc::new(InMemoryStore::new());
        let handler = SaveProfileHandler::new(store);

        let profile = handler
            .handle(SaveProfileCommand {
                user: user(),
                display_name: Some(String::new()),
                tee_shirt_size: None,
            })
            .await
            .unwrap();

        assert_eq!(profile.display_name, "ada@example.com");
        assert_eq!(profile.tee_shirt_size, TeeShirtSize::NotSpecified);
    }

    #[tokio::test]
    async fn edit_does_not_undo_registration_made_after_load() {
        let store = Arc::new(InMemoryStore::new());
        let conference = Conference::create(
            UserId::new("org").unwrap(),
            ConferenceDraft {
                name: Some("RustConf".into()),
                max_attendees: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
        ConferenceRepository::create(store.as_ref(), &conference)
            .await
            .unwrap();
        let stale = load_or_create_profile(store.as_ref(), &user()).await.unwrap();
        assert!(!stale.is_attending(&conference.key));

        store
            .apply(&user().id, &conference.key, RegistrationAction::Register)
            .await
            .unwrap();
        let profile = SaveProfileHandler::new(store.clone())
            .handle(SaveProfileCommand {
                user: user(),
                display_name: Some("Ada".into()),
                tee_shirt_size: None,
            })
            .await
            .unwrap();

        let conference = ConferenceRepository::find(store.as_ref(), &conference.key)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.display_name, "Ada");
        assert!(profile.is_attending(&conference.key));
        assert_eq!(conference.seats_available, 4);
        let stored = ProfileRepository::find(store.as_ref(), &user().id).await.unwrap().unwrap();
        assert_eq!(stored.conference_keys_to_attend, vec![conference.key]);
    }
}
