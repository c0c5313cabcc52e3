//! AddToWishlistHandler - Command handler for wishlist additions.

use std::sync::Arc;

use crate::application::handlers::profile::load_or_create_profile;
use crate::domain::foundation::{AuthenticatedUser, SessionKey};
use crate::domain::profile::ProfileError;
use crate::ports::{ProfileRepository, SessionRepository};

#[derive(Debug, Clone)]
pub struct AddToWishlistCommand {
    pub user: AuthenticatedUser,
    pub websafe_session_key: String,
}

pub struct AddToWishlistHandler {
    profiles: Arc<dyn ProfileRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl AddToWishlistHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { profiles, sessions }
    }

    /// Appends the session and returns `true`. Duplicates are a conflict.
    pub async fn handle(&self, cmd: AddToWishlistCommand) -> Result<bool, ProfileError> {
        let websafe = cmd.websafe_session_key;
        let key = SessionKey::from_websafe(&websafe)
            .map_err(|_| ProfileError::session_not_found(&websafe))?;
        if self.sessions.find(&key).await?.is_none() {
            return Err(ProfileError::session_not_found(&websafe));
        }

        load_or_create_profile(self.profiles.as_ref(), &cmd.user).await?;
        if !self.profiles.add_to_wishlist(&cmd.user.id, &key).await? {
            return Err(ProfileError::AlreadyInWishlist);
        }

        tracing::info!(user_id = %cmd.user.id, session = %websafe, "Session added to wishlist");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::conference::{Conference, ConferenceDraft, RegistrationAction};
    use crate::domain::foundation::{ConferenceId, ConferenceKey, SessionId, UserId};
    use crate::ports::{ConferenceRepository, RegistrationLedger};
    use crate::domain::session::{Session, SessionDraft};

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("fan").unwrap(), "fan@example.com", None)
    }

    async fn stored_session(store: &InMemoryStore) -> Session {
        let session = Session::create(
            ConferenceKey::new(UserId::new("org").unwrap(), ConferenceId::new()),
            SessionDraft {
                name: Some("Lifetimes".into()),
                ..Default::default()
            },
        )
        .unwrap();
        SessionRepository::create(store, &session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn adds_once_then_conflicts() {
        let store = Arc::new(InMemoryStore::new());
        let session = stored_session(&store).await;
        let handler = AddToWishlistHandler::new(store.clone(), store.clone());
        let cmd = AddToWishlistCommand {
            user: user(),
            websafe_session_key: session.key.to_websafe(),
        };

        assert!(handler.handle(cmd.clone()).await.unwrap());
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, ProfileError::AlreadyInWishlist);
        let profile = ProfileRepository::find(store.as_ref(), &user().id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.session_keys_wishlist, vec![session.key]);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let handler = AddToWishlistHandler::new(store.clone(), store);
        let missing = SessionKey::new(
            ConferenceKey::new(UserId::new("org").unwrap(), ConferenceId::new()),
            SessionId::new(),
        );

        for websafe in [missing.to_websafe(), "garbage".to_string()] {
            let err = handler
                .handle(AddToWishlistCommand {
                    user: user(),
                    websafe_session_key: websafe,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, ProfileError::SessionNotFound(_)));
        }
    }

    #[tokio::test]
    async fn wishlist_add_keeps_attendance() {
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
        let session = Session::create(
            conference.key.clone(),
            SessionDraft {
                name: Some("Lifetimes".into()),
                ..Default::default()
            },
        )
        .unwrap();
        SessionRepository::create(store.as_ref(), &session)
            .await
            .unwrap();
        load_or_create_profile(store.as_ref(), &user()).await.unwrap();
        store
            .apply(&user().id, &conference.key, RegistrationAction::Register)
            .await
            .unwrap();

        let handler = AddToWishlistHandler::new(store.clone(), store.clone());
        handler
            .handle(AddToWishlistCommand {
                user: user(),
                websafe_session_key: session.key.to_websafe(),
            })
            .await
            .unwrap();

        let profile = ProfileRepository::find(store.as_ref(), &user().id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.conference_keys_to_attend, vec![conference.key]);
        assert_eq!(profile.session_keys_wishlist, vec![session.key]);
    }
}
