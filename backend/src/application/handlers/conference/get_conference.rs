//! GetConferenceHandler - Query handler for a single conference.

use std::sync::Arc;

use crate::domain::conference::ConferenceError;
use crate::ports::{ConferenceRepository, ProfileRepository};

use super::{resolve_key, ConferenceView};

#[derive(Debug, Clone)]
pub struct GetConferenceQuery {
    pub websafe_key: String,
}

pub struct GetConferenceHandler {
    profiles: Arc<dyn ProfileRepository>,
    conferences: Arc<dyn ConferenceRepository>,
}

impl GetConferenceHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        conferences: Arc<dyn ConferenceRepository>,
    ) -> Self {
        Self {
            profiles,
            conferences,
        }
    }

    pub async fn handle(&self, query: GetConferenceQuery) -> Result<ConferenceView, ConferenceError> {
        let key = resolve_key(&query.websafe_key)?;
        let conference = self
            .conferences
            .find(&key)
            .await?
            .ok_or_else(|| ConferenceError::not_found(&query.websafe_key))?;

        let organizer_name = self
            .profiles
            .find(conference.organizer())
            .await?
            .map(|p| p.display_name);

        Ok(ConferenceView::new(conference, organizer_name))
    }
}
