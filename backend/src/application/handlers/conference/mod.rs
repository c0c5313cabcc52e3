//! Conference handlers.
//!
//! ## Commands
//! - Creating conferences (scoped to the caller)
//! - Registering and unregistering for conferences
//!
//! ## Queries
//! - Single conference by websafe key
//! - Filtered conference search
//! - Conferences created by / attended by the caller

mod change_registration;
mod create_conference;
mod get_conference;
mod list_attending;
mod list_created;
mod query_conferences;
mod view;

// Commands
pub use change_registration::{ChangeRegistrationCommand, ChangeRegistrationHandler};
pub use create_conference::{CreateConferenceCommand, CreateConferenceHandler};

// Queries
pub use get_conference::{GetConferenceHandler, GetConferenceQuery};
pub use list_attending::{ListAttendingHandler, ListAttendingQuery};
pub use list_created::{ListCreatedHandler, ListCreatedQuery};
pub use query_conferences::{FilterInput, QueryConferencesHandler, QueryConferencesQuery};
pub use view::ConferenceView;

use crate::domain::conference::ConferenceError;
use crate::domain::foundation::ConferenceKey;

/// Decodes a websafe key. Keys that do not decode resolve to nothing.
fn resolve_key(websafe: &str) -> Result<ConferenceKey, ConferenceError> {
    ConferenceKey::from_websafe(websafe).map_err(|_| ConferenceError::not_found(websafe))
}
