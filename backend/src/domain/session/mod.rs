//! Session domain module.
//!
//! Sessions are talks or workshops scheduled inside a conference. Only the
//! conference organizer may add them. A speaker with more than one session in
//! the same conference becomes the featured speaker.

mod aggregate;
mod errors;
pub mod featured;
mod query;

pub use aggregate::{Session, SessionDraft};
pub use errors::SessionError;
pub use featured::{featured_candidate, FEATURED_SPEAKER_KEY};
pub use query::SessionQuery;
