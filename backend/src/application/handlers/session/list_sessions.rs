//! ListSessionsHandler - Equality lookups over sessions.

use std::sync::Arc;

use crate::domain::foundation::ConferenceKey;
use crate::domain::session::{Session, SessionError, SessionQuery};
use crate::ports::SessionRepository;

/// Optional equality constraints. A conference key that does not decode
/// matches no sessions.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    pub websafe_conference_key: Option<String>,
    pub session_type: Option<String>,
    pub speaker: Option<String>,
}

impl ListSessionsQuery {
    pub fn in_conference(websafe_key: impl Into<String>) -> Self {
        Self {
            websafe_conference_key: Some(websafe_key.into()),
            ..Default::default()
        }
    }

    pub fn of_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = Some(session_type.into());
        self
    }

    pub fn by_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }
}

pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Matching sessions, oldest first. No pagination.
    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<Session>, SessionError> {
        let mut session_query = SessionQuery::new();

        if let Some(websafe) = &query.websafe_conference_key {
            match ConferenceKey::from_websafe(websafe) {
                Ok(key) => session_query = session_query.in_conference(key),
                Err(_) => return Ok(Vec::new()),
            }
        }
        if let Some(session_type) = query.session_type {
            session_query = session_query.of_type(session_type);
        }
        if let Some(speaker) = query.speaker {
            session_query = session_query.by_speaker(speaker);
        }

        Ok(self.sessions.find_by(&session_query).await?)
    }
}
