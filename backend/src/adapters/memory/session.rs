use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionKey};
use crate::domain::session::{Session, SessionQuery};
use crate::ports::SessionRepository;

use super::InMemoryStore;

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        self.state.write().await.sessions.push(session.clone());
        Ok(())
    }

    async fn find(&self, key: &SessionKey) -> Result<Option<Session>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .sessions
            .iter()
            .find(|s| &s.key == key)
            .cloned())
    }

    async fn find_many(&self, keys: &[SessionKey]) -> Result<Vec<Session>, DomainError> {
        let state = self.state.read().await;
        Ok(keys
            .iter()
            .filter_map(|key| state.sessions.iter().find(|s| &s.key == key).cloned())
            .collect())
    }

    async fn find_by(&self, query: &SessionQuery) -> Result<Vec<Session>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .sessions
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect())
    }

    async fn count_by(&self, query: &SessionQuery) -> Result<usize, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .sessions
            .iter()
            .filter(|s| query.matches(s))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConferenceId, ConferenceKey, UserId};
    use crate::domain::session::SessionDraft;

    fn session(conference: &ConferenceKey, name: &str, speaker: &str) -> Session {
        Session::create(
            conference.clone(),
            SessionDraft {
                name: Some(name.into()),
                speaker: Some(speaker.into()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn find_by_returns_creation_order() {
        let store = InMemoryStore::new();
        let conf = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        for name in ["first", "second", "third"] {
            store.create(&session(&conf, name, "Ferris")).await.unwrap();
        }

        let found = store
            .find_by(&SessionQuery::new().in_conference(conf))
            .await
            .unwrap();
        let names: Vec<_> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn count_by_scopes_to_conference_and_speaker() {
        let store = InMemoryStore::new();
        let conf = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        let other = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        store.create(&session(&conf, "a", "Ferris")).await.unwrap();
        store.create(&session(&conf, "b", "Corro")).await.unwrap();
        store.create(&session(&other, "c", "Ferris")).await.unwrap();

        let count = store
            .count_by(&SessionQuery::new().in_conference(conf).by_speaker("Ferris"))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn find_resolves_by_key() {
        let store = InMemoryStore::new();
        let conf = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        let s = session(&conf, "a", "Ferris");
        store.create(&s).await.unwrap();

        assert_eq!(store.find(&s.key).await.unwrap(), Some(s));
    }
}
