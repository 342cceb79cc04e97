//! Color metadata assistant.
//!
//! Looks up paint-color metadata from the colors API for the color detail
//! page open in the document editor, previews it, and inserts it into the
//! document as a `metadata` block table.

pub mod api;
pub mod assistant;
pub mod color;
pub mod error;
pub mod host;
pub mod routes;
pub mod state;
