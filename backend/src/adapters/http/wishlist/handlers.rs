//! HTTP handlers for wishlist endpoints.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::envelope::{DataResponse, ItemsResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::profile::handle_profile_error;
use crate::adapters::http::session::SessionResponse;
use crate::adapters::http::state::AppState;
use crate::application::handlers::wishlist::{AddToWishlistCommand, ListWishlistQuery};

/// POST /api/sessionWishList/:sessionKey
pub async fn add_session_to_wishlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(websafe_session_key): Path<String>,
) -> Response {
    let cmd = AddToWishlistCommand {
        user,
        websafe_session_key,
    };

    match state.add_to_wishlist_handler().handle(cmd).await {
        Ok(added) => Json(DataResponse::new(added)).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// POST /api/getSessionsInWishList
pub async fn get_sessions_in_wishlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match state
        .list_wishlist_handler()
        .handle(ListWishlistQuery { user })
        .await
    {
        Ok(sessions) => Json(ItemsResponse::<SessionResponse>::convert(sessions)).into_response(),
        Err(e) => handle_profile_error(e),
    }
}
