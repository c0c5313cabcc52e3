//! Profile aggregate.
//!
//! # Invariants
//!
//! - One profile per user id
//! - `conference_keys_to_attend` and `session_keys_wishlist` hold no duplicates

use crate::domain::foundation::{AuthenticatedUser, ConferenceKey, SessionKey, UserId};

use super::{ProfileError, TeeShirtSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: String,
    pub main_email: String,
    pub tee_shirt_size: TeeShirtSize,
    pub conference_keys_to_attend: Vec<ConferenceKey>,
    pub session_keys_wishlist: Vec<SessionKey>,
}

impl Profile {
    /// Fresh profile for a user seen for the first time.
    pub fn for_user(user: &AuthenticatedUser) -> Self {
        Self {
            user_id: user.id.clone(),
            display_name: user.display_name_or_email().to_string(),
            main_email: user.email.clone(),
            tee_shirt_size: TeeShirtSize::NotSpecified,
            conference_keys_to_attend: Vec::new(),
            session_keys_wishlist: Vec::new(),
        }
    }

    /// Applies the editable profile fields. Absent or blank values are ignored.
    pub fn update(&mut self, display_name: Option<&str>, tee_shirt_size: Option<TeeShirtSize>) {
        if let Some(name) = display_name.map(str::trim).filter(|n| !n.is_empty()) {
            self.display_name = name.to_string();
        }
        if let Some(size) = tee_shirt_size {
            self.tee_shirt_size = size;
        }
    }

    pub fn is_attending(&self, key: &ConferenceKey) -> bool {
        self.conference_keys_to_attend.contains(key)
    }

    /// Adds the conference to the attendance list. Returns false if already there.
    pub fn attend(&mut self, key: ConferenceKey) -> bool {
        if self.is_attending(&key) {
            return false;
        }
        self.conference_keys_to_attend.push(key);
        true
    }

    /// Removes the conference from the attendance list. Returns false if absent.
    pub fn leave(&mut self, key: &ConferenceKey) -> bool {
        let before = self.conference_keys_to_attend.len();
        self.conference_keys_to_attend.retain(|k| k != key);
        before != self.conference_keys_to_attend.len()
    }

    pub fn has_in_wishlist(&self, key: &SessionKey) -> bool {
        self.session_keys_wishlist.contains(key)
    }

    pub fn add_to_wishlist(&mut self, key: SessionKey) -> Result<(), ProfileError> {
        if self.has_in_wishlist(&key) {
            return Err(ProfileError::AlreadyInWishlist);
        }
        self.session_keys_wishlist.push(key);
        Ok(())
    }
}
