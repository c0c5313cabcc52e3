//! HTTP handlers for session endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::envelope::{DataResponse, ItemsResponse};
use crate::adapters::http::error::{error_response, internal_error};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::session::{CreateSessionCommand, ListSessionsQuery};
use crate::domain::session::SessionError;

use super::dto::{SessionForm, SessionResponse};

/// POST /api/session - Add a session to a conference the caller organizes
pub async fn create_session(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<SessionForm>,
) -> Response {
    let (websafe_conference_key, draft) = form.into_parts();
    let cmd = CreateSessionCommand {
        user,
        websafe_conference_key,
        draft,
    };

    match state.create_session_handler().handle(cmd).await {
        Ok(session) => (StatusCode::CREATED, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/getConferenceSessions/:websafeConferenceKey
pub async fn get_conference_sessions(
    State(state): State<AppState>,
    Path(websafe_key): Path<String>,
) -> Response {
    list(state, ListSessionsQuery::in_conference(websafe_key)).await
}

/// GET /api/getConferenceSessionsByType/:websafeConferenceKey/:type
pub async fn get_conference_sessions_by_type(
    State(state): State<AppState>,
    Path((websafe_key, session_type)): Path<(String, String)>,
) -> Response {
    list(
        state,
        ListSessionsQuery::in_conference(websafe_key).of_type(session_type),
    )
    .await
}

/// GET /api/getSessionsBySpeaker/:speaker
pub async fn get_sessions_by_speaker(
    State(state): State<AppState>,
    Path(speaker): Path<String>,
) -> Response {
    list(state, ListSessionsQuery::default().by_speaker(speaker)).await
}

/// POST /api/sessionTypeBySpeaker/:sessionType/:speakerName
pub async fn get_sessions_by_type_and_speaker(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path((session_type, speaker)): Path<(String, String)>,
) -> Response {
    list(
        state,
        ListSessionsQuery::default()
            .of_type(session_type)
            .by_speaker(speaker),
    )
    .await
}

/// POST /api/allConferenceSessionsOfSpeaker/:websafeConferenceKey/:speakerName
pub async fn get_conference_sessions_by_speaker(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path((websafe_key, speaker)): Path<(String, String)>,
) -> Response {
    list(
        state,
        ListSessionsQuery::in_conference(websafe_key).by_speaker(speaker),
    )
    .await
}

/// GET /api/getFeaturedSpeaker - `{ "data": null }` until a speaker is featured
pub async fn get_featured_speaker(State(state): State<AppState>) -> Response {
    match state.featured_speaker_handler().handle().await {
        Ok(speaker) => Json(DataResponse::new(speaker)).into_response(),
        Err(e) => handle_session_error(e),
    }
}

async fn list(state: AppState, query: ListSessionsQuery) -> Response {
    match state.list_sessions_handler().handle(query).await {
        Ok(sessions) => Json(ItemsResponse::<SessionResponse>::convert(sessions)).into_response(),
        Err(e) => handle_session_error(e),
    }
}

fn handle_session_error(error: SessionError) -> Response {
    let code = error.code();
    match error {
        SessionError::NotFound(_) | SessionError::ConferenceNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, code, error.message())
        }
        SessionError::ValidationFailed { .. } => {
            error_response(StatusCode::BAD_REQUEST, code, error.message())
        }
        SessionError::NotOrganizer => error_response(StatusCode::CONFLICT, code, error.message()),
        SessionError::Infrastructure(detail) => internal_error(&detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_organizer_is_conflict() {
        let response = handle_session_error(SessionError::NotOrganizer);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_parent_conference_is_404() {
        let response = handle_session_error(SessionError::conference_not_found("nope"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
