//! Background task handlers.
//!
//! `TaskRunner` dispatches queued `Task`s; the HTTP task endpoint calls
//! `SetFeaturedSpeakerHandler` directly.

mod run_task;
mod set_featured_speaker;

pub use run_task::TaskRunner;
pub use set_featured_speaker::{SetFeaturedSpeakerCommand, SetFeaturedSpeakerHandler};
