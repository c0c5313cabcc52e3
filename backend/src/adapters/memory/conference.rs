use async_trait::async_trait;

use crate::domain::conference::{Conference, QueryPlan};
use crate::domain::foundation::{ConferenceKey, DomainError, UserId};
use crate::ports::ConferenceRepository;

use super::InMemoryStore;

#[async_trait]
impl ConferenceRepository for InMemoryStore {
    async fn create(&self, conference: &Conference) -> Result<(), DomainError> {
        self.state
            .write()
            .await
            .conferences
            .insert(conference.key.clone(), conference.clone());
        Ok(())
    }

    async fn find(&self, key: &ConferenceKey) -> Result<Option<Conference>, DomainError> {
        Ok(self.state.read().await.conferences.get(key).cloned())
    }

    async fn find_many(&self, keys: &[ConferenceKey]) -> Result<Vec<Conference>, DomainError> {
        let state = self.state.read().await;
        Ok(keys
            .iter()
            .filter_map(|key| state.conferences.get(key).cloned())
            .collect())
    }

    async fn find_by_organizer(&self, organizer: &UserId) -> Result<Vec<Conference>, DomainError> {
        let mut found: Vec<Conference> = self
            .state
            .read()
            .await
            .conferences
            .values()
            .filter(|c| c.organizer() == organizer)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn query(&self, plan: &QueryPlan) -> Result<Vec<Conference>, DomainError> {
        let mut found: Vec<Conference> = self
            .state
            .read()
            .await
            .conferences
            .values()
            .filter(|c| plan.matches(c))
            .cloned()
            .collect();
        plan.sort(&mut found);
        Ok(found)
    }
}
