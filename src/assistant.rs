//! Color metadata assistant — page path → lookup → preview → insert.
//!
//! DESIGN
//! ======
//! The assistant drives a `PanelState` handed in by the caller instead of
//! reaching for UI elements itself. A lookup has one suspend point (the list
//! fetch) and shares nothing with other lookups; every action issues its own
//! fetch. Failures never escape as errors: each one ends as a panel message
//! and stops only the current action.
//!
//! Messages
//! --------
//! - not on a detail page → neutral `NAVIGATE_MESSAGE`, no fetch
//! - fetch / lookup failure → `Failed to fetch color data: <reason>`
//! - insert unavailable → `Cannot insert block: editor connection unavailable`

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{self, ColorApiError, ColorSource};
use crate::color::{self, ColorPreview, ColorRecord, RenderOptions};
use crate::host::EditorHost;

pub const NAVIGATE_MESSAGE: &str = "Navigate to a color detail page to use this tool";
pub const INSERT_SUCCESS_MESSAGE: &str = "Color metadata block inserted successfully.";

const DETAIL_PATH_PREFIX: &str = "/colors/color-detail/";

/// Color code from a `/colors/color-detail/<code>` path, taken verbatim.
#[must_use]
pub fn extract_color_code(path: &str) -> Option<&str> {
    let code = path.strip_prefix(DETAIL_PATH_PREFIX)?;
    (!code.is_empty() && !code.contains('/')).then_some(code)
}

// =============================================================================
// PANEL STATE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelMessage {
    pub text: String,
    pub is_error: bool,
}

/// Everything the panel displays. Starts empty: no message, no preview,
/// insert hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelState {
    pub message: Option<PanelMessage>,
    pub loading: bool,
    pub preview: Option<ColorPreview>,
    pub insert_enabled: bool,
}

impl PanelState {
    pub fn show_message(&mut self, text: impl Into<String>, is_error: bool) {
        self.message = Some(PanelMessage { text: text.into(), is_error });
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Show the preview card and enable the insert action.
    pub fn show_record(&mut self, record: &ColorRecord) {
        self.preview = Some(ColorPreview::from_record(record));
        self.insert_enabled = true;
    }

    pub fn show_failure(&mut self, err: &ColorApiError) {
        self.show_message(format!("Failed to fetch color data: {err}"), true);
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.message.as_ref().is_some_and(|m| m.is_error)
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A successfully loaded color, ready to insert any number of times.
#[derive(Debug, Clone)]
pub struct Session {
    record: ColorRecord,
    render: RenderOptions,
}

impl Session {
    #[must_use]
    pub fn record(&self) -> &ColorRecord {
        &self.record
    }

    /// Metadata table markup for this color. Same input, same output.
    #[must_use]
    pub fn html(&self) -> String {
        color::render_metadata_table_with(&self.record, self.render)
    }

    /// Insert the metadata table through the host. The preview is left as is
    /// whatever the outcome. Returns `true` when the host accepted the markup.
    pub async fn insert(&self, host: &dyn EditorHost, panel: &mut PanelState) -> bool {
        match host.insert_html(&self.html()).await {
            Ok(()) => {
                info!(code = %self.record.code, "assistant: metadata block inserted");
                panel.show_message(INSERT_SUCCESS_MESSAGE, false);
                true
            }
            Err(e) => {
                warn!(code = %self.record.code, error = %e, "assistant: insert failed");
                panel.show_message(format!("Cannot insert block: {e}"), true);
                false
            }
        }
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

#[derive(Clone)]
pub struct ColorMetadataAssistant {
    source: Arc<dyn ColorSource>,
    render: RenderOptions,
}

impl ColorMetadataAssistant {
    #[must_use]
    pub fn new(source: Arc<dyn ColorSource>) -> Self {
        Self { source, render: RenderOptions::default() }
    }

    #[must_use]
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Fetch the list and normalize the record for `code`.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure, or [`ColorApiError::NotFound`].
    pub async fn fetch_record(&self, code: &str) -> Result<ColorRecord, ColorApiError> {
        let raw = api::lookup_color(self.source.as_ref(), code).await?;
        Ok(color::normalize(&raw))
    }

    #[must_use]
    pub fn session(&self, record: ColorRecord) -> Session {
        Session { record, render: self.render }
    }

    /// Run the lookup for the host's current page, updating `panel` as it
    /// goes. Returns a session only when a color was loaded.
    pub async fn open(&self, host: &dyn EditorHost, panel: &mut PanelState) -> Option<Session> {
        let context = host.context().await;
        let Some(code) = context.path.as_deref().and_then(extract_color_code) else {
            info!(path = ?context.path, "assistant: not a color detail page");
            panel.show_message(NAVIGATE_MESSAGE, false);
            return None;
        };

        panel.set_loading(true);
        let result = self.fetch_record(code).await;
        panel.set_loading(false);

        match result {
            Ok(record) => {
                info!(%code, name = %record.name, "assistant: color loaded");
                panel.show_record(&record);
                Some(self.session(record))
            }
            Err(e) => {
                warn!(%code, error = %e, "assistant: lookup failed");
                panel.show_failure(&e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
