//! Websafe entity keys.
//!
//! Conferences and sessions are addressed externally by an opaque string that
//! encodes the entity's ancestor path:
//!
//! ```text
//! Profile/<user id>/Conference/<uuid>
//! Profile/<user id>/Conference/<uuid>/Session/<uuid>
//! ```
//!
//! The path is encoded as URL-safe base64 without padding. Paths are parsed
//! from the right, so user ids may contain `/`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::fmt;
use std::str::FromStr;

use super::{ConferenceId, SessionId, UserId, ValidationError};

const PROFILE_KIND: &str = "Profile";
const CONFERENCE_KIND: &str = "Conference";
const SESSION_KIND: &str = "Session";

/// Key of a conference: the organizer's profile plus the conference id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConferenceKey {
    pub organizer: UserId,
    pub id: ConferenceId,
}

impl ConferenceKey {
    pub fn new(organizer: UserId, id: ConferenceId) -> Self {
        Self { organizer, id }
    }

    /// Returns the ancestor path this key stands for.
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            PROFILE_KIND, self.organizer, CONFERENCE_KIND, self.id
        )
    }

    /// Encodes the key into its websafe form.
    pub fn to_websafe(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.path())
    }

    /// Decodes a websafe string. Fails for anything that is not a conference key.
    pub fn from_websafe(websafe: &str) -> Result<Self, ValidationError> {
        let path = decode_path(websafe)?;
        Self::from_path(&path)
    }

    fn from_path(path: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = path.rsplitn(3, '/').collect();
        match parts.as_slice() {
            [id, CONFERENCE_KIND, profile] => {
                let organizer = parse_profile(profile)?;
                let id = ConferenceId::from_str(id).map_err(|_| invalid_key())?;
                Ok(Self { organizer, id })
            }
            _ => Err(invalid_key()),
        }
    }
}

impl fmt::Display for ConferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_websafe())
    }
}

/// Key of a session: the parent conference key plus the session id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub conference: ConferenceKey,
    pub id: SessionId,
}

impl SessionKey {
    pub fn new(conference: ConferenceKey, id: SessionId) -> Self {
        Self { conference, id }
    }

    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.conference.path(), SESSION_KIND, self.id)
    }

    pub fn to_websafe(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.path())
    }

    /// Decodes a websafe string. Fails for anything that is not a session key.
    pub fn from_websafe(websafe: &str) -> Result<Self, ValidationError> {
        let path = decode_path(websafe)?;
        let (parent, id) = match path.rsplitn(3, '/').collect::<Vec<_>>().as_slice() {
            [id, SESSION_KIND, parent] => (parent.to_string(), id.to_string()),
            _ => return Err(invalid_key()),
        };
        let conference = ConferenceKey::from_path(&parent)?;
        let id = SessionId::from_str(&id).map_err(|_| invalid_key())?;
        Ok(Self { conference, id })
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_websafe())
    }
}

fn decode_path(websafe: &str) -> Result<String, ValidationError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(websafe.trim_end_matches('='))
        .map_err(|_| invalid_key())?;
    String::from_utf8(bytes).map_err(|_| invalid_key())
}

fn parse_profile(segment: &str) -> Result<UserId, ValidationError> {
    let user = segment
        .strip_prefix(PROFILE_KIND)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(invalid_key)?;
    UserId::new(user)
}

fn invalid_key() -> ValidationError {
    ValidationError::invalid_format("websafeKey", "not a valid entity key")
}
