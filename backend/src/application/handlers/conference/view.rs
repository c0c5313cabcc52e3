//! Conference read model with the organizer's display name attached.

use std::collections::HashMap;

use crate::domain::conference::Conference;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceView {
    pub conference: Conference,
    /// Absent when the organizer has no stored profile.
    pub organizer_display_name: Option<String>,
}

impl ConferenceView {
    pub fn new(conference: Conference, organizer_display_name: Option<String>) -> Self {
        Self {
            conference,
            organizer_display_name,
        }
    }

    /// Attaches organizer names, reading each distinct organizer's profile once.
    pub async fn with_organizer_names(
        profiles: &dyn ProfileRepository,
        conferences: Vec<Conference>,
    ) -> Result<Vec<Self>, DomainError> {
        let mut names: HashMap<UserId, Option<String>> = HashMap::new();
        let mut views = Vec::with_capacity(conferences.len());

        for conference in conferences {
            let organizer = conference.organizer().clone();
            let name = match names.get(&organizer) {
                Some(name) => name.clone(),
                None => {
                    let name = profiles.find(&organizer).await?.map(|p| p.display_name);
                    names.insert(organizer, name.clone());
                    name
                }
            };
            views.push(Self::new(conference, name));
        }

        Ok(views)
    }
}
