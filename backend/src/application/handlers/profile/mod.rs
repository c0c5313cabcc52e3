//! Profile handlers.
//!
//! Profiles are created lazily: every handler that needs the caller's
//! profile goes through `load_or_create_profile`.

mod get_profile;
mod save_profile;

pub use get_profile::{load_or_create_profile, GetProfileHandler, GetProfileQuery};
pub use save_profile::{SaveProfileCommand, SaveProfileHandler};
