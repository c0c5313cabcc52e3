//! Featured speaker rule.
//!
//! A speaker with more than one session in the same conference is featured.
//! The name lives in one global cache slot; the last writer wins.

use super::Session;

/// Cache slot holding the featured speaker's name.
pub const FEATURED_SPEAKER_KEY: &str = "FEATURED_SPEAKER";

/// Returns the speaker to feature after `session` was created, given how many
/// sessions (including this one) that speaker now has in the conference.
pub fn featured_candidate(session: &Session, sessions_by_speaker: usize) -> Option<&str> {
    match session.speaker.as_deref() {
        Some(speaker) if sessions_by_speaker > 1 => Some(speaker),
        _ => None,
    }
}
