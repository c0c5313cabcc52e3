//! HTTP adapter for session endpoints.
//!
//! Listing endpoints are plain equality lookups; the two POST lookups
//! require a caller but do not scope results to them.

mod dto;
mod handlers;
mod routes;

pub use dto::{SessionForm, SessionResponse};
pub use routes::session_routes;
