//! Color metadata routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::api::ColorApiError;
use crate::assistant::{NAVIGATE_MESSAGE, PanelState, extract_color_code};
use crate::color::ColorRecord;
use crate::error::ErrorCode;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MetadataQuery {
    pub path: Option<String>,
}

/// Panel as the plugin page should draw it, plus the markup to insert.
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub panel: PanelState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

pub(crate) fn api_error_to_status(err: &ColorApiError) -> StatusCode {
    match err {
        ColorApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ColorApiError::Request(_) | ColorApiError::Status { .. } | ColorApiError::Parse(_) => StatusCode::BAD_GATEWAY,
        ColorApiError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/color-metadata?path=...` — run a lookup for a document path.
///
/// Pages that are not color detail pages get `200` with the neutral
/// message. Lookup failures carry the error message in the panel: `404` for
/// an unknown code, `502` when the colors API itself failed.
pub async fn color_metadata(State(state): State<AppState>, Query(query): Query<MetadataQuery>) -> Response {
    let mut panel = PanelState::default();

    let Some(code) = query.path.as_deref().and_then(extract_color_code) else {
        panel.show_message(NAVIGATE_MESSAGE, false);
        return Json(MetadataResponse { panel, html: None, code: None }).into_response();
    };

    match state.assistant.fetch_record(code).await {
        Ok(record) => {
            panel.show_record(&record);
            let html = state.assistant.session(record).html();
            Json(MetadataResponse { panel, html: Some(html), code: None }).into_response()
        }
        Err(e) => {
            tracing::warn!(%code, error = %e, "color-metadata: lookup failed");
            panel.show_failure(&e);
            let body = MetadataResponse { panel, html: None, code: Some(e.error_code()) };
            (api_error_to_status(&e), Json(body)).into_response()
        }
    }
}

/// `GET /api/colors/:code` — canonical record for one color code.
pub async fn get_color(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ColorRecord>, (StatusCode, Json<ErrorResponse>)> {
    state.assistant.fetch_record(&code).await.map(Json).map_err(|e| {
        tracing::warn!(%code, error = %e, "colors: lookup failed");
        (api_error_to_status(&e), Json(ErrorResponse { code: e.error_code(), message: e.to_string() }))
    })
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
