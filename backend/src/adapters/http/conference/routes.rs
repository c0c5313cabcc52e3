//! Axum routes for conference endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_conference, get_conference, get_conferences_created, get_conferences_to_attend,
    query_conferences, register_for_conference, unregister_from_conference,
};

/// Conference routes, mounted under `/api`.
pub fn conference_routes() -> Router<AppState> {
    Router::new()
        .route("/conference", post(create_conference))
        .route(
            "/conference/:websafe_conference_key",
            get(get_conference)
                .post(register_for_conference)
                .delete(unregister_from_conference),
        )
        .route("/queryConferences", post(query_conferences))
        .route("/getConferencesCreated", post(get_conferences_created))
        .route("/conferences/attending", get(get_conferences_to_attend))
}
