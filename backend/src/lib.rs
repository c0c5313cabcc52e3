//! Conference Central - conference organisation API.
//!
//! Users create conferences, register for them, schedule sessions and keep
//! a wishlist of sessions. A background task tracks the featured speaker.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
