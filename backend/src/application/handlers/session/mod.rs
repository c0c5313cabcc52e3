//! Session handlers.
//!
//! ## Commands
//! - Creating sessions (conference organizer only), which may enqueue the
//!   featured speaker task
//!
//! ## Queries
//! - Session listings by conference, type and speaker
//! - The current featured speaker

mod create_session;
mod get_featured_speaker;
mod list_sessions;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use get_featured_speaker::GetFeaturedSpeakerHandler;
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
