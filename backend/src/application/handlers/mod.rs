//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, one
//! module per area.

pub mod conference;
pub mod profile;
pub mod session;
pub mod tasks;
pub mod wishlist;
