//! Axum routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_session, get_conference_sessions, get_conference_sessions_by_speaker,
    get_conference_sessions_by_type, get_featured_speaker, get_sessions_by_speaker,
    get_sessions_by_type_and_speaker,
};

/// Session routes, mounted under `/api`.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(create_session))
        .route(
            "/getConferenceSessions/:websafe_conference_key",
            get(get_conference_sessions),
        )
        .route(
            "/getConferenceSessionsByType/:websafe_conference_key/:session_type",
            get(get_conference_sessions_by_type),
        )
        .route("/getSessionsBySpeaker/:speaker", get(get_sessions_by_speaker))
        .route(
            "/sessionTypeBySpeaker/:session_type/:speaker_name",
            post(get_sessions_by_type_and_speaker),
        )
        .route(
            "/allConferenceSessionsOfSpeaker/:websafe_conference_key/:speaker_name",
            post(get_conference_sessions_by_speaker),
        )
        .route("/getFeaturedSpeaker", get(get_featured_speaker))
}
