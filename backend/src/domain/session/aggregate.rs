//! Session aggregate.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::foundation::{
    parse_date, parse_time, ConferenceKey, SessionId, SessionKey, Timestamp, ValidationError,
};

use super::SessionError;

/// Client-supplied fields for a new session.
#[derive(Debug, Clone, Default)]
pub struct SessionDraft {
    pub name: Option<String>,
    pub highlights: Option<String>,
    pub speaker: Option<String>,
    pub duration_minutes: Option<i32>,
    pub session_type: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub key: SessionKey,
    pub name: String,
    pub highlights: Option<String>,
    pub speaker: Option<String>,
    pub duration_minutes: Option<i32>,
    pub session_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub created_at: Timestamp,
}

impl Session {
    /// Builds a new session under `conference`.
    ///
    /// The name is required. Dates read `YYYY-MM-DD`, start times read `HH:MM`.
    pub fn create(conference: ConferenceKey, draft: SessionDraft) -> Result<Self, SessionError> {
        let name = non_blank(draft.name)
            .ok_or_else(|| SessionError::validation("name", "Session 'name' field required"))?;

        if let Some(minutes) = draft.duration_minutes {
            if minutes < 0 {
                return Err(ValidationError::out_of_range(
                    "duration",
                    0,
                    i32::MAX as i64,
                    minutes as i64,
                )
                .into());
            }
        }

        let date = match non_blank(draft.date) {
            Some(value) => Some(parse_date("date", &value)?),
            None => None,
        };
        let start_time = match non_blank(draft.start_time) {
            Some(value) => Some(parse_time("startTime", &value)?),
            None => None,
        };

        Ok(Self {
            key: SessionKey::new(conference, SessionId::new()),
            name,
            highlights: non_blank(draft.highlights),
            speaker: non_blank(draft.speaker),
            duration_minutes: draft.duration_minutes,
            session_type: non_blank(draft.session_type),
            date,
            start_time,
            created_at: Timestamp::now(),
        })
    }

    pub fn conference(&self) -> &ConferenceKey {
        &self.key.conference
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConferenceId, UserId};

    fn conference_key() -> ConferenceKey {
        ConferenceKey::new(UserId::new("organizer").unwrap(), ConferenceId::new())
    }

    #[test]
    fn create_parses_date_and_time_prefixes() {
        let session = Session::create(
            conference_key(),
            SessionDraft {
                name: Some("Async Rust".into()),
                speaker: Some("Ferris".into()),
                date: Some("2026-11-02T00:00".into()),
                start_time: Some("09:30:00".into()),
                duration_minutes: Some(45),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(session.date, NaiveDate::from_ymd_opt(2026, 11, 2));
        assert_eq!(session.start_time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(session.speaker.as_deref(), Some("Ferris"));
    }

    #[test]
    fn create_requires_name() {
        let err = Session::create(conference_key(), SessionDraft::default()).unwrap_err();
        assert_eq!(err.to_string(), "Session 'name' field required");
    }

    #[test]
    fn blank_speaker_is_treated_as_absent() {
        let session = Session::create(
            conference_key(),
            SessionDraft {
                name: Some("Keynote".into()),
                speaker: Some("   ".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(session.speaker, None);
    }

    #[test]
    fn session_key_points_at_parent_conference() {
        let parent = conference_key();
        let session = Session::create(
            parent.clone(),
            SessionDraft {
                name: Some("Lightning talks".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(session.conference(), &parent);
    }

    #[test]
    fn bad_start_time_is_rejected() {
        let result = Session::create(
            conference_key(),
            SessionDraft {
                name: Some("Workshop".into()),
                start_time: Some("noon".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(SessionError::ValidationFailed { .. })));
    }
}
