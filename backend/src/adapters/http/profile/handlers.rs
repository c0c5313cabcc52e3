//! HTTP handlers for the profile endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, internal_error};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::profile::{GetProfileQuery, SaveProfileCommand};
use crate::domain::profile::{ProfileError, TeeShirtSize};

use super::dto::{ProfileForm, ProfileResponse};

/// GET /api/profile - The caller's profile, created on first access
pub async fn get_profile(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    match state
        .get_profile_handler()
        .handle(GetProfileQuery { user })
        .await
    {
        Ok(profile) => Json(ProfileResponse::from(profile)).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// POST /api/profile - Update display name and tee-shirt size
pub async fn save_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<ProfileForm>,
) -> Response {
    let tee_shirt_size = match form
        .tee_shirt_size
        .as_deref()
        .map(str::parse::<TeeShirtSize>)
        .transpose()
    {
        Ok(size) => size,
        Err(e) => return handle_profile_error(e.into()),
    };

    let cmd = SaveProfileCommand {
        user,
        display_name: form.display_name,
        tee_shirt_size,
    };

    match state.save_profile_handler().handle(cmd).await {
        Ok(profile) => Json(ProfileResponse::from(profile)).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// Maps profile and wishlist errors to responses.
pub(crate) fn handle_profile_error(error: ProfileError) -> Response {
    let code = error.code();
    match error {
        ProfileError::SessionNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, code, error.message())
        }
        ProfileError::ValidationFailed { .. } => {
            error_response(StatusCode::BAD_REQUEST, code, error.message())
        }
        ProfileError::AlreadyInWishlist => {
            error_response(StatusCode::CONFLICT, code, error.message())
        }
        ProfileError::Infrastructure(detail) => internal_error(&detail),
    }
}
