//! Seat accounting for conference registration.
//!
//! `apply_registration` is the pure state transition. Callers must load both
//! records and persist both results atomically (see `RegistrationLedger`).

use crate::domain::profile::Profile;

use super::{Conference, ConferenceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationAction {
    Register,
    Unregister,
}

/// Applies `action` for `profile` on `conference`.
///
/// Returns `Ok(true)` when both records changed and must be written back.
/// Unregistering a user who is not registered returns `Ok(false)` and leaves
/// both records untouched.
pub fn apply_registration(
    profile: &mut Profile,
    conference: &mut Conference,
    action: RegistrationAction,
) -> Result<bool, ConferenceError> {
    match action {
        RegistrationAction::Register => {
            if profile.is_attending(&conference.key) {
                return Err(ConferenceError::AlreadyRegistered);
            }
            conference.take_seat()?;
            profile.attend(conference.key.clone());
            Ok(true)
        }
        RegistrationAction::Unregister => {
            if !profile.leave(&conference.key) {
                return Ok(false);
            }
            conference.release_seat();
            Ok(true)
        }
    }
}
