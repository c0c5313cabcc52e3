//! ListAttendingHandler - Conferences the caller is registered for.

use std::sync::Arc;

use crate::application::handlers::profile::load_or_create_profile;
use crate::domain::conference::ConferenceError;
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{ConferenceRepository, ProfileRepository};

use super::ConferenceView;

#[derive(Debug, Clone)]
pub struct ListAttendingQuery {
    pub user: AuthenticatedUser,
}

pub struct ListAttendingHandler {
    profiles: Arc<dyn ProfileRepository>,
    conferences: Arc<dyn ConferenceRepository>,
}

impl ListAttendingHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        conferences: Arc<dyn ConferenceRepository>,
    ) -> Self {
        Self {
            profiles,
            conferences,
        }
    }

    /// Conferences in registration order.
    pub async fn handle(
        &self,
        query: ListAttendingQuery,
    ) -> Result<Vec<ConferenceView>, ConferenceError> {
        let profile = load_or_create_profile(self.profiles.as_ref(), &query.user).await?;
        let conferences = self
            .conferences
            .find_many(&profile.conference_keys_to_attend)
            .await?;

        Ok(ConferenceView::with_organizer_names(self.profiles.as_ref(), conferences).await?)
    }
}
