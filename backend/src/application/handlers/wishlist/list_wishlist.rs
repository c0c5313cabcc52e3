//! ListWishlistHandler - Sessions on the caller's wishlist.

use std::sync::Arc;

use crate::application::handlers::profile::load_or_create_profile;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::profile::ProfileError;
use crate::domain::session::Session;
use crate::ports::{ProfileRepository, SessionRepository};

#[derive(Debug, Clone)]
pub struct ListWishlistQuery {
    pub user: AuthenticatedUser,
}

pub struct ListWishlistHandler {
    profiles: Arc<dyn ProfileRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl ListWishlistHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { profiles, sessions }
    }

    /// Sessions in wishlist order. Entries that no longer resolve are skipped.
    pub async fn handle(&self, query: ListWishlistQuery) -> Result<Vec<Session>, ProfileError> {
        let profile = load_or_create_profile(self.profiles.as_ref(), &query.user).await?;
        Ok(self.sessions.find_many(&profile.session_keys_wishlist).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{ConferenceId, ConferenceKey, SessionId, SessionKey, UserId};
    use crate::domain::profile::Profile;
    use crate::domain::session::SessionDraft;

    #[tokio::test]
    async fn returns_sessions_in_wishlist_order_skipping_missing() {
        let store = Arc::new(InMemoryStore::new());
        let conference = ConferenceKey::new(UserId::new("org").unwrap(), ConferenceId::new());
        let mut stored = Vec::new();
        for name in ["First", "Second"] {
            let session = Session::create(
                conference.clone(),
                SessionDraft {
                    name: Some(name.into()),
                    ..Default::default()
                },
            )
            .unwrap();
            SessionRepository::create(store.as_ref(), &session)
                .await
                .unwrap();
            stored.push(session);
        }

        let user = AuthenticatedUser::new(UserId::new("fan").unwrap(), "fan@example.com", None);
        let mut profile = Profile::for_user(&user);
        profile.add_to_wishlist(stored[1].key.clone()).unwrap();
        profile
            .add_to_wishlist(SessionKey::new(conference, SessionId::new()))
            .unwrap();
        profile.add_to_wishlist(stored[0].key.clone()).unwrap();
        ProfileRepository::create(store.as_ref(), &profile).await.unwrap();

        let sessions = ListWishlistHandler::new(store.clone(), store)
            .handle(ListWishlistQuery { user })
            .await
            .unwrap();

        let names: Vec<_> = sessions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }
}
