//! HTTP adapter for conference endpoints.
//!
//! - `POST /api/conference` - Create a conference
//! - `GET /api/conference/:key` - Get one conference
//! - `POST /api/conference/:key` - Register for a conference
//! - `DELETE /api/conference/:key` - Unregister from a conference
//! - `POST /api/queryConferences` - Filtered search
//! - `POST /api/getConferencesCreated` - Caller's conferences
//! - `GET /api/conferences/attending` - Conferences the caller attends

mod dto;
mod handlers;
mod routes;

pub use dto::{ConferenceForm, ConferenceQueryFilter, ConferenceQueryForm, ConferenceResponse};
pub use routes::conference_routes;
