//! Profile domain module.
//!
//! A profile is created lazily the first time a user touches the system. It
//! owns the user's attendance list and session wishlist.

mod aggregate;
mod errors;
mod tee_shirt;

pub use aggregate::Profile;
pub use errors::ProfileError;
pub use tee_shirt::TeeShirtSize;
