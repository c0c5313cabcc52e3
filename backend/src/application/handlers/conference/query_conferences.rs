//! QueryConferencesHandler - Filtered conference search.

use std::sync::Arc;

use crate::domain::conference::{ConferenceError, QueryPlan};
use crate::ports::{ConferenceRepository, ProfileRepository};

use super::ConferenceView;

/// One raw `(field, operator, value)` triple as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterInput {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryConferencesQuery {
    pub filters: Vec<FilterInput>,
}

pub struct QueryConferencesHandler {
    profiles: Arc<dyn ProfileRepository>,
    conferences: Arc<dyn ConferenceRepository>,
}

impl QueryConferencesHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        conferences: Arc<dyn ConferenceRepository>,
    ) -> Self {
        Self {
            profiles,
            conferences,
        }
    }

    pub async fn handle(
        &self,
        query: QueryConferencesQuery,
    ) -> Result<Vec<ConferenceView>, ConferenceError> {
        let plan = QueryPlan::compile(
            query
                .filters
                .iter()
                .map(|f| (f.field.as_str(), f.operator.as_str(), f.value.as_str())),
        )?;

        let conferences = self.conferences.query(&plan).await?;
        Ok(ConferenceView::with_organizer_names(self.profiles.as_ref(), conferences).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::conference::{Conference, ConferenceDraft};
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::domain::profile::Profile;

    async fn seed(store: &InMemoryStore, name: &str, city: &str, max: i32) {
        let conference = Conference::create(
            UserId::new("org").unwrap(),
            ConferenceDraft {
                name: Some(name.into()),
                city: Some(city.into()),
                max_attendees: Some(max),
                ..Default::default()
            },
        )
        .unwrap();
        ConferenceRepository::create(store, &conference).await.unwrap();
    }

    fn handler(store: &Arc<InMemoryStore>) -> QueryConferencesHandler {
        QueryConferencesHandler::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn london_with_more_than_five_seats() {
        let store = Arc::new(InMemoryStore::new());
        seed(&store, "A", "London", 3).await;
        seed(&store, "B", "London", 10).await;
        seed(&store, "C", "Paris", 50).await;

        let views = handler(&store)
            .handle(QueryConferencesQuery {
                filters: vec![
                    FilterInput::new("CITY", "EQ", "London"),
                    FilterInput::new("MAX_ATTENDEES", "GT", "5"),
                ],
            })
            .await
            .unwrap();

        let names: Vec<_> = views.iter().map(|v| v.conference.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[tokio::test]
    async fn second_inequality_field_is_rejected() {
        let store = Arc::new(InMemoryStore::new());
        let err = handler(&store)
            .handle(QueryConferencesQuery {
                filters: vec![
                    FilterInput::new("MAX_ATTENDEES", "GT", "5"),
                    FilterInput::new("MONTH", "LT", "6"),
                ],
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Inequality filter is allowed on only one field."
        );
    }

    #[tokio::test]
    async fn no_filters_returns_everything_by_name_with_organizer() {
        let store = Arc::new(InMemoryStore::new());
        let organizer = AuthenticatedUser::new(
            UserId::new("org").unwrap(),
            "org@example.com",
            Some("Organizer".into()),
        );
        crate::ports::ProfileRepository::create(store.as_ref(), &Profile::for_user(&organizer))
            .await
            .unwrap();
        seed(&store, "Zeta", "Oslo", 1).await;
        seed(&store, "Alpha", "Rome", 1).await;

        let views = handler(&store)
            .handle(QueryConferencesQuery::default())
            .await
            .unwrap();

        let names: Vec<_> = views.iter().map(|v| v.conference.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
        assert!(views
            .iter()
            .all(|v| v.organizer_display_name.as_deref() == Some("Organizer")));
    }
}
