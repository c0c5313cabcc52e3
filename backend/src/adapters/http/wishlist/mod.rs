//! HTTP adapter for the caller's session wishlist.
//!
//! - `POST /api/sessionWishList/:sessionKey` - Add a session
//! - `POST /api/getSessionsInWishList` - List wishlisted sessions

mod handlers;

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

/// Wishlist routes, mounted under `/api`.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessionWishList/:websafe_session_key",
            post(handlers::add_session_to_wishlist),
        )
        .route("/getSessionsInWishList", post(handlers::get_sessions_in_wishlist))
}
