//! ChangeRegistrationHandler - Register or unregister the caller.

use std::sync::Arc;

use crate::application::handlers::profile::load_or_create_profile;
use crate::domain::conference::{ConferenceError, RegistrationAction};
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{ProfileRepository, RegistrationLedger};

use super::resolve_key;

#[derive(Debug, Clone)]
pub struct ChangeRegistrationCommand {
    pub user: AuthenticatedUser,
    pub websafe_key: String,
    pub action: RegistrationAction,
}

/// Seat accounting runs inside the ledger; this handler only makes sure
/// the caller's profile exists first.
pub struct ChangeRegistrationHandler {
    profiles: Arc<dyn ProfileRepository>,
    ledger: Arc<dyn RegistrationLedger>,
}

impl ChangeRegistrationHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, ledger: Arc<dyn RegistrationLedger>) -> Self {
        Self { profiles, ledger }
    }

    /// Returns whether anything changed. Unregistering when not registered
    /// is `Ok(false)`.
    pub async fn handle(&self, cmd: ChangeRegistrationCommand) -> Result<bool, ConferenceError> {
        let key = resolve_key(&cmd.websafe_key)?;
        load_or_create_profile(self.profiles.as_ref(), &cmd.user).await?;

        let changed = self.ledger.apply(&cmd.user.id, &key, cmd.action).await?;

        if changed {
            tracing::info!(
                user_id = %cmd.user.id,
                conference = %key,
                action = ?cmd.action,
                "Registration changed"
            );
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::conference::{ListAttendingHandler, ListAttendingQuery};
    use crate::domain::conference::{Conference, ConferenceDraft};
    use crate::domain::foundation::{ConferenceKey, UserId};
    use crate::ports::ConferenceRepository;

    fn user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None)
    }

    async fn seeded(seats: i32) -> (Arc<InMemoryStore>, ConferenceKey) {
        let store = Arc::new(InMemoryStore::new());
        let conference = Conference::create(
            UserId::new("org").unwrap(),
            ConferenceDraft {
                name: Some("EuroRust".into()),
                max_attendees: Some(seats),
                ..Default::default()
            },
        )
        .unwrap();
        ConferenceRepository::create(store.as_ref(), &conference)
            .await
            .unwrap();
        (store, conference.key)
    }

    fn command(who: &str, key: &ConferenceKey, action: RegistrationAction) -> ChangeRegistrationCommand {
        ChangeRegistrationCommand {
            user: user(who),
            websafe_key: key.to_websafe(),
            action,
        }
    }

    async fn seats(store: &InMemoryStore, key: &ConferenceKey) -> i32 {
        ConferenceRepository::find(store, key)
            .await
            .unwrap()
            .unwrap()
            .seats_available
    }

    #[tokio::test]
    async fn register_unregister_register_restores_seat_count() {
        let (store, key) = seeded(3).await;
        let handler = ChangeRegistrationHandler::new(store.clone(), store.clone());

        assert!(handler.handle(command("u", &key, RegistrationAction::Register)).await.unwrap());
        assert_eq!(seats(&store, &key).await, 2);
        assert!(handler.handle(command("u", &key, RegistrationAction::Unregister)).await.unwrap());
        assert_eq!(seats(&store, &key).await, 3);
        assert!(handler.handle(command("u", &key, RegistrationAction::Register)).await.unwrap());
        assert_eq!(seats(&store, &key).await, 2);
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts_without_changes() {
        let (store, key) = seeded(3).await;
        let handler = ChangeRegistrationHandler::new(store.clone(), store.clone());
        handler
            .handle(command("u", &key, RegistrationAction::Register))
            .await
            .unwrap();

        let err = handler
            .handle(command("u", &key, RegistrationAction::Register))
            .await
            .unwrap_err();

        assert_eq!(err, ConferenceError::AlreadyRegistered);
        assert_eq!(seats(&store, &key).await, 2);
    }

    #[tokio::test]
    async fn full_conference_rejects_registration() {
        let (store, key) = seeded(0).await;
        let handler = ChangeRegistrationHandler::new(store.clone(), store);

        let err = handler
            .handle(command("u", &key, RegistrationAction::Register))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "There are no seats available.");
    }

    #[tokio::test]
    async fn unregister_when_not_registered_is_false() {
        let (store, key) = seeded(3).await;
        let handler = ChangeRegistrationHandler::new(store.clone(), store.clone());

        let changed = handler
            .handle(command("u", &key, RegistrationAction::Unregister))
            .await
            .unwrap();

        assert!(!changed);
        assert_eq!(seats(&store, &key).await, 3);
    }

    #[tokio::test]
    async fn garbled_key_is_not_found() {
        let (store, _) = seeded(3).await;
        let handler = ChangeRegistrationHandler::new(store.clone(), store);

        let err = handler
            .handle(ChangeRegistrationCommand {
                user: user("u"),
                websafe_key: "not-a-key".into(),
                action: RegistrationAction::Register,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ConferenceError::NotFound(_)));
    }

    #[tokio::test]
    async fn attending_list_follows_registrations() {
        let (store, key) = seeded(3).await;
        ChangeRegistrationHandler::new(store.clone(), store.clone())
            .handle(command("u", &key, RegistrationAction::Register))
            .await
            .unwrap();

        let views = ListAttendingHandler::new(store.clone(), store)
            .handle(ListAttendingQuery { user: user("u") })
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].conference.key, key);
        assert_eq!(views[0].conference.seats_available, 2);
    }
}
