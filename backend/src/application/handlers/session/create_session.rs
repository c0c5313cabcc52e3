//! CreateSessionHandler - Command handler for new sessions.
//!
//! After the session is stored, the handler counts the speaker's sessions in
//! the same conference. When the speaker has more than one, a
//! `SetFeaturedSpeaker` task is enqueued. Once the session is stored, count
//! and enqueue failures are logged and do not fail the request.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ConferenceKey, OwnedByUser};
use crate::domain::session::{
    featured_candidate, Session, SessionDraft, SessionError, SessionQuery,
};
use crate::ports::{ConferenceRepository, SessionRepository, Task, TaskQueue};

#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub user: AuthenticatedUser,
    pub websafe_conference_key: String,
    pub draft: SessionDraft,
}

pub struct CreateSessionHandler {
    conferences: Arc<dyn ConferenceRepository>,
    sessions: Arc<dyn SessionRepository>,
    tasks: Arc<dyn TaskQueue>,
}

impl CreateSessionHandler {
    pub fn new(
        conferences: Arc<dyn ConferenceRepository>,
        sessions: Arc<dyn SessionRepository>,
        tasks: Arc<dyn TaskQueue>,
    ) -> Self {
        Self {
            conferences,
            sessions,
            tasks,
        }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, SessionError> {
        // Name is checked before the conference is looked up.
        if cmd.draft.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(SessionError::validation("name", "Session 'name' field required"));
        }

        let conference_key = ConferenceKey::from_websafe(&cmd.websafe_conference_key)
            .map_err(|_| SessionError::conference_not_found(&cmd.websafe_conference_key))?;
        let conference = self
            .conferences
            .find(&conference_key)
            .await?
            .ok_or_else(|| SessionError::conference_not_found(&cmd.websafe_conference_key))?;

        if !conference.is_owner(&cmd.user.id) {
            return Err(SessionError::NotOrganizer);
        }

        let session = Session::create(conference.key, cmd.draft)?;
        self.sessions.create(&session).await?;

        tracing::info!(
            session = %session.key,
            conference = %session.conference(),
            speaker = session.speaker.as_deref().unwrap_or(""),
            "Session created"
        );

        self.maybe_feature_speaker(&session).await;
        Ok(session)
    }

    async fn maybe_feature_speaker(&self, session: &Session) {
        let Some(speaker) = session.speaker.as_deref() else {
            return;
        };

        let query = SessionQuery::new()
            .in_conference(session.conference().clone())
            .by_speaker(speaker);
        let count = match self.sessions.count_by(&query).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(speaker, error = %e, "Failed to count speaker sessions");
                return;
            }
        };

        if let Some(speaker) = featured_candidate(session, count) {
            let task = Task::SetFeaturedSpeaker {
                speaker: speaker.to_string(),
            };
            if let Err(e) = self.tasks.enqueue(task).await {
                tracing::warn!(speaker, error = %e, "Failed to enqueue featured speaker task");
            }
        }
    }
}
