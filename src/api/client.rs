//! Colors API HTTP client.
//!
//! Thin wrapper over `GET <base>/colors`. Pure parsing in `parse_colors` for
//! testability. No request timeout and no retry: a slow or failed fetch
//! surfaces once, as is.

use tracing::{debug, warn};

use super::config::ColorApiConfig;
use super::types::{ColorApiError, ColorSource};
use crate::color::RawColorRecord;

// =============================================================================
// CLIENT
// =============================================================================

pub struct ColorApiClient {
    http: reqwest::Client,
    colors_url: String,
}

impl ColorApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ColorApiConfig) -> Result<Self, ColorApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ColorApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, colors_url: config.colors_url() })
    }

    #[must_use]
    pub fn colors_url(&self) -> &str {
        &self.colors_url
    }
}

#[async_trait::async_trait]
impl ColorSource for ColorApiClient {
    async fn fetch_colors(&self) -> Result<Vec<RawColorRecord>, ColorApiError> {
        debug!(url = %self.colors_url, "colors: fetching list");

        let response = self
            .http
            .get(&self.colors_url)
            .send()
            .await
            .map_err(|e| ColorApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "colors: non-success response");
            // The status is the failure; an unreadable body leaves it empty.
            let body = response.text().await.unwrap_or_default();
            return Err(ColorApiError::Status { status: status.as_u16(), body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ColorApiError::Request(e.to_string()))?;

        let colors = parse_colors(&text)?;
        debug!(count = colors.len(), "colors: list fetched");
        Ok(colors)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse the list body. Non-object entries are dropped; they cannot carry a
/// color code.
pub(crate) fn parse_colors(json: &str) -> Result<Vec<RawColorRecord>, ColorApiError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| ColorApiError::Parse(e.to_string()))?;

    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
