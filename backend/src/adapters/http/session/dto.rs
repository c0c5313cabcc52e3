//! Wire forms for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::session::{Session, SessionDraft};

/// Request body for `POST /api/session`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionForm {
    #[serde(alias = "name")]
    pub session_name: Option<String>,
    pub highlights: Option<String>,
    pub speaker: Option<String>,
    pub duration: Option<i32>,
    pub session_type: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub websafe_conference_key: String,
}

impl SessionForm {
    /// Splits the form into the parent key and the session fields.
    pub fn into_parts(self) -> (String, SessionDraft) {
        let draft = SessionDraft {
            name: self.session_name,
            highlights: self.highlights,
            speaker: self.speaker,
            duration_minutes: self.duration,
            session_type: self.session_type,
            date: self.date,
            start_time: self.start_time,
        };
        (self.websafe_conference_key, draft)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub websafe_key: String,
    pub session_name: String,
    pub highlights: Option<String>,
    pub speaker: Option<String>,
    pub duration: Option<i32>,
    pub session_type: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub websafe_conference_key: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            websafe_key: session.key.to_websafe(),
            websafe_conference_key: session.conference().to_websafe(),
            session_name: session.name,
            highlights: session.highlights,
            speaker: session.speaker,
            duration: session.duration_minutes,
            session_type: session.session_type,
            date: session.date.map(|d| d.format("%Y-%m-%d").to_string()),
            start_time: session.start_time.map(|t| t.format("%H:%M").to_string()),
        }
    }
}
