//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own HTTP adapter. All of them share `AppState`
//! and are assembled by `api_router`.

pub mod conference;
pub mod envelope;
pub mod error;
pub mod health;
pub mod middleware;
pub mod profile;
pub mod router;
pub mod session;
pub mod state;
pub mod tasks;
pub mod wishlist;

pub use error::ErrorResponse;
pub use router::{api_router, build_app_router};
pub use state::AppState;
