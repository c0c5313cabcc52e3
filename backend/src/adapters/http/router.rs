//! Router assembly.
//!
//! `api_router` wires every area under `/api` behind the auth middleware and
//! adds `/health` and `/tasks`. `build_app_router` adds the tower-http stack
//! on top, so the binary and integration tests serve the same thing.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{middleware::from_fn_with_state, Router};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

use super::conference::conference_routes;
use super::health::health_routes;
use super::middleware::auth_middleware;
use super::profile::profile_routes;
use super::session::session_routes;
use super::state::AppState;
use super::tasks::task_routes;
use super::wishlist::wishlist_routes;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Routes only, no tower layers.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(conference_routes())
        .merge(profile_routes())
        .merge(session_routes())
        .merge(wishlist_routes())
        .layer(from_fn_with_state(state.validator.clone(), auth_middleware));

    Router::new()
        .nest("/api", api)
        .merge(task_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Full application router with middleware (applied bottom-up).
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    api_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS from the configured origin list. Origins that are not valid header
/// values are skipped with a warning.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}
