//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, websafe keys, errors)
//! - `profile` - User profiles, attendance and wishlists
//! - `conference` - Conferences, search filters and seat registration
//! - `session` - Conference sessions and the featured speaker rule

pub mod conference;
pub mod foundation;
pub mod profile;
pub mod session;
