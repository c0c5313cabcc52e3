//! HTTP adapter for the caller's profile.
//!
//! - `GET /api/profile` - Fetch (and lazily create) the profile
//! - `POST /api/profile` - Save display name and tee-shirt size

mod dto;
mod handlers;

pub use dto::{ProfileForm, ProfileResponse};
pub(crate) use handlers::handle_profile_error;

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

/// Profile routes, mounted under `/api`.
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(handlers::get_profile).post(handlers::save_profile))
}
