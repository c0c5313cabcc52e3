//! HTTP handlers for conference endpoints.

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
use crate::application::handlers::conference::{
    ChangeRegistrationCommand, CreateConferenceCommand, GetConferenceQuery, ListAttendingQuery,
    ListCreatedQuery, QueryConferencesQuery,
};
use crate::domain::conference::{ConferenceError, RegistrationAction};
use crate::domain::foundation::AuthenticatedUser;

use super::dto::{ConferenceForm, ConferenceQueryForm, ConferenceResponse};

/// POST /api/conference - Create a conference owned by the caller
pub async fn create_conference(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<ConferenceForm>,
) -> Response {
    let cmd = CreateConferenceCommand {
        user,
        draft: form.into(),
    };

    match state.create_conference_handler().handle(cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(ConferenceResponse::from(view))).into_response(),
        Err(e) => handle_conference_error(e),
    }
}

/// GET /api/conference/:websafeConferenceKey
pub async fn get_conference(
    State(state): State<AppState>,
    Path(websafe_key): Path<String>,
) -> Response {
    match state
        .get_conference_handler()
        .handle(GetConferenceQuery { websafe_key })
        .await
    {
        Ok(view) => Json(ConferenceResponse::from(view)).into_response(),
        Err(e) => handle_conference_error(e),
    }
}

/// POST /api/queryConferences
pub async fn query_conferences(
    State(state): State<AppState>,
    Json(form): Json<ConferenceQueryForm>,
) -> Response {
    let query = QueryConferencesQuery {
        filters: form.filters.into_iter().map(Into::into).collect(),
    };

    match state.query_conferences_handler().handle(query).await {
        Ok(views) => Json(ItemsResponse::<ConferenceResponse>::convert(views)).into_response(),
        Err(e) => handle_conference_error(e),
    }
}

/// POST /api/getConferencesCreated
pub async fn get_conferences_created(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match state
        .list_created_handler()
        .handle(ListCreatedQuery { user })
        .await
    {
        Ok(views) => Json(ItemsResponse::<ConferenceResponse>::convert(views)).into_response(),
        Err(e) => handle_conference_error(e),
    }
}

/// GET /api/conferences/attending
pub async fn get_conferences_to_attend(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match state
        .list_attending_handler()
        .handle(ListAttendingQuery { user })
        .await
    {
        Ok(views) => Json(ItemsResponse::<ConferenceResponse>::convert(views)).into_response(),
        Err(e) => handle_conference_error(e),
    }
}

/// POST /api/conference/:websafeConferenceKey - Register the caller
pub async fn register_for_conference(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(websafe_key): Path<String>,
) -> Response {
    change_registration(state, user, websafe_key, RegistrationAction::Register).await
}

/// DELETE /api/conference/:websafeConferenceKey - Unregister the caller
pub async fn unregister_from_conference(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(websafe_key): Path<String>,
) -> Response {
    change_registration(state, user, websafe_key, RegistrationAction::Unregister).await
}

async fn change_registration(
    state: AppState,
    user: AuthenticatedUser,
    websafe_key: String,
    action: RegistrationAction,
) -> Response {
    let cmd = ChangeRegistrationCommand {
        user,
        websafe_key,
        action,
    };

    match state.change_registration_handler().handle(cmd).await {
        Ok(changed) => Json(DataResponse::new(changed)).into_response(),
        Err(e) => handle_conference_error(e),
    }
}

fn handle_conference_error(error: ConferenceError) -> Response {
    let code = error.code();
    match error {
        ConferenceError::NotFound(_) => error_response(StatusCode::NOT_FOUND, code, error.message()),
        ConferenceError::ValidationFailed { .. } => {
            error_response(StatusCode::BAD_REQUEST, code, error.message())
        }
        ConferenceError::AlreadyRegistered | ConferenceError::NoSeatsAvailable => {
            error_response(StatusCode::CONFLICT, code, error.message())
        }
        ConferenceError::Infrastructure(detail) => internal_error(&detail),
    }
}
