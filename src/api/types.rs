//! Colors API types — errors and the source trait.

use crate::color::RawColorRecord;
use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Failures while fetching the color list or locating a color in it.
///
/// Display strings are shown to the user verbatim after
/// `Failed to fetch color data: `.
#[derive(Debug, thiserror::Error)]
pub enum ColorApiError {
    /// The HTTP request did not complete.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("Failed to fetch colors (HTTP {status})")]
    Status { status: u16, body: String },

    /// The response body was not a JSON array of objects.
    #[error("invalid colors response: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The list was fetched but holds no record with this code.
    #[error("Color not found: {0}")]
    NotFound(String),
}

impl ErrorCode for ColorApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_API_REQUEST",
            Self::Status { .. } => "E_API_RESPONSE",
            Self::Parse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::NotFound(_) => "E_COLOR_NOT_FOUND",
        }
    }
}

// =============================================================================
// COLOR SOURCE TRAIT
// =============================================================================

/// Anything that can produce the full raw color list. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ColorSource: Send + Sync {
    /// Fetch every color record.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorApiError`] if the request fails, the status is not a
    /// success, or the body is not a JSON array of objects.
    async fn fetch_colors(&self) -> Result<Vec<RawColorRecord>, ColorApiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
