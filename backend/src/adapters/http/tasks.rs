//! Task endpoint for external dispatchers.
//!
//! `GET /tasks/set_featured_speaker?speakerName=...` runs the featured
//! speaker job inline. Not behind auth; deployments restrict `/tasks` at
//! the edge.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::adapters::http::error::{error_response, internal_error};
use crate::adapters::http::state::AppState;
use crate::application::handlers::tasks::SetFeaturedSpeakerCommand;
use crate::domain::foundation::ErrorCode;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFeaturedSpeakerParams {
    pub speaker_name: Option<String>,
}

/// GET /tasks/set_featured_speaker
pub async fn set_featured_speaker(
    State(state): State<AppState>,
    Query(params): Query<SetFeaturedSpeakerParams>,
) -> Response {
    let Some(speaker) = params.speaker_name.filter(|s| !s.trim().is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            "speakerName is required",
        );
    };

    match state
        .set_featured_speaker_handler()
        .handle(SetFeaturedSpeakerCommand { speaker })
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => internal_error(&e.to_string()),
    }
}

pub fn task_routes() -> Router<AppState> {
    Router::new().route("/tasks/set_featured_speaker", get(set_featured_speaker))
}
