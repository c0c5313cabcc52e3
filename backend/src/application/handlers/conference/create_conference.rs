//! CreateConferenceHandler - Command handler for new conferences.

use std::sync::Arc;

use crate::domain::conference::{Conference, ConferenceDraft, ConferenceError};
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{ConferenceRepository, ProfileRepository};

use super::ConferenceView;
use crate::application::handlers::profile::load_or_create_profile;

#[derive(Debug, Clone)]
pub struct CreateConferenceCommand {
    pub user: AuthenticatedUser,
    pub draft: ConferenceDraft,
}

/// Creates a conference owned by the caller.
///
/// The caller's profile is created first if needed, since the conference
/// hangs off it.
pub struct CreateConferenceHandler {
    profiles: Arc<dyn ProfileRepository>,
    conferences: Arc<dyn ConferenceRepository>,
}

impl CreateConferenceHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        conferences: Arc<dyn ConferenceRepository>,
    ) -> Self {
        Self {
            profiles,
            conferences,
        }
    }

    pub async fn handle(&self, cmd: CreateConferenceCommand) -> Result<ConferenceView, ConferenceError> {
        let conference = Conference::create(cmd.user.id.clone(), cmd.draft)?;
        let profile = load_or_create_profile(self.profiles.as_ref(), &cmd.user).await?;

        self.conferences.create(&conference).await?;

        tracing::info!(
            conference = %conference.key,
            organizer = %cmd.user.id,
            max_attendees = conference.max_attendees,
            "Conference created"
        );

        Ok(ConferenceView::new(conference, Some(profile.display_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::UserId;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("organizer-1").unwrap(),
            "org@example.com",
            Some("Org".into()),
        )
    }

    #[tokio::test]
    async fn creates_conference_and_profile() {
        let store = Arc::new(InMemoryStore::new());
        let handler = CreateConferenceHandler::new(store.clone(), store.clone());

        let view = handler
            .handle(CreateConferenceCommand {
                user: user(),
                draft: ConferenceDraft {
                    name: Some("RustConf".into()),
                    max_attendees: Some(10),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(view.conference.seats_available, 10);
        assert_eq!(view.organizer_display_name.as_deref(), Some("Org"));
        assert_eq!(store.conference_count().await, 1);
        assert!(ProfileRepository::find(store.as_ref(), &user().id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn missing_name_stores_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let handler = CreateConferenceHandler::new(store.clone(), store.clone());

        let err = handler
            .handle(CreateConferenceCommand {
                user: user(),
                draft: ConferenceDraft::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ConferenceError::ValidationFailed { .. }));
        assert_eq!(store.conference_count().await, 0);
    }
}
