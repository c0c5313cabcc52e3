//! Equality queries over sessions.

use crate::domain::foundation::ConferenceKey;

use super::Session;

/// Conjunction of optional equality constraints. An empty query matches
/// every session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionQuery {
    pub conference: Option<ConferenceKey>,
    pub session_type: Option<String>,
    pub speaker: Option<String>,
}

impl SessionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_conference(mut self, conference: ConferenceKey) -> Self {
        self.conference = Some(conference);
        self
    }

    pub fn of_type(mut self, session_type: impl Into<String>) -> Self {
        self.session_type = Some(session_type.into());
        self
    }

    pub fn by_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn matches(&self, session: &Session) -> bool {
        self.conference
            .as_ref()
            .map_or(true, |c| session.conference() == c)
            && self
                .session_type
                .as_deref()
                .map_or(true, |t| session.session_type.as_deref() == Some(t))
            && self
                .speaker
                .as_deref()
                .map_or(true, |s| session.speaker.as_deref() == Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConferenceId, UserId};
    use crate::domain::session::SessionDraft;

    fn session(conference: &ConferenceKey, kind: &str, speaker: Option<&str>) -> Session {
        Session::create(
            conference.clone(),
            SessionDraft {
                name: Some(format!("{} talk", kind)),
                session_type: Some(kind.to_string()),
                speaker: speaker.map(String::from),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_query_matches_everything() {
        let conf = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        assert!(SessionQuery::new().matches(&session(&conf, "workshop", None)));
    }

    #[test]
    fn constraints_combine_with_and() {
        let conf = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        let other = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        let query = SessionQuery::new()
            .in_conference(conf.clone())
            .by_speaker("Ferris");

        assert!(query.matches(&session(&conf, "talk", Some("Ferris"))));
        assert!(!query.matches(&session(&conf, "talk", Some("Corro"))));
        assert!(!query.matches(&session(&other, "talk", Some("Ferris"))));
    }

    #[test]
    fn speaker_constraint_skips_sessions_without_speaker() {
        let conf = ConferenceKey::new(UserId::new("o").unwrap(), ConferenceId::new());
        let query = SessionQuery::new().of_type("keynote").by_speaker("Ferris");
        assert!(!query.matches(&session(&conf, "keynote", None)));
    }
}
