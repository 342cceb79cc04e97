//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor loads the plugin page in a cross-origin frame, so every API
//! route carries a permissive CORS layer. Requests are traced through
//! `tower-http`.

pub mod metadata;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/color-metadata", get(metadata::color_metadata))
        .route("/api/colors/{code}", get(metadata::get_color))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
