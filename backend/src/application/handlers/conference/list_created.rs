//! ListCreatedHandler - Conferences organized by the caller.

use std::sync::Arc;

use crate::application::handlers::profile::load_or_create_profile;
use crate::domain::conference::ConferenceError;
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{ConferenceRepository, ProfileRepository};

use super::ConferenceView;

#[derive(Debug, Clone)]
pub struct ListCreatedQuery {
    pub user: AuthenticatedUser,
}

pub struct ListCreatedHandler {
    profiles: Arc<dyn ProfileRepository>,
    conferences: Arc<dyn ConferenceRepository>,
}

impl ListCreatedHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        conferences: Arc<dyn ConferenceRepository>,
    ) -> Self {
        Self {
            profiles,
            conferences,
        }
    }

    pub async fn handle(&self, query: ListCreatedQuery) -> Result<Vec<ConferenceView>, ConferenceError> {
        let profile = load_or_create_profile(self.profiles.as_ref(), &query.user).await?;
        let conferences = self.conferences.find_by_organizer(&query.user.id).await?;

        Ok(conferences
            .into_iter()
            .map(|c| ConferenceView::new(c, Some(profile.display_name.clone())))
            .collect())
    }
}
