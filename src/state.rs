//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the assistant, whose color source is shared read-only; no
//! lookup state survives a request.

use std::sync::Arc;

use crate::api::ColorSource;
use crate::assistant::ColorMetadataAssistant;
use crate::color::RenderOptions;

/// Clone is required by Axum; the color source is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub assistant: ColorMetadataAssistant,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn ColorSource>, render: RenderOptions) -> Self {
        Self { assistant: ColorMetadataAssistant::new(source).with_render_options(render) }
    }
}
