//! Color records — raw API shape, canonical shape, and what we build from them.
//!
//! DESIGN
//! ======
//! The remote API controls the raw record shape entirely and spells the same
//! concept several ways. `normalize` collapses every spelling into one
//! `ColorRecord`; everything downstream (preview card, metadata table, HTTP
//! responses) reads only the canonical record.

pub mod normalize;
pub mod preview;
pub mod render;

use serde::Serialize;

pub use normalize::normalize;
pub use preview::{ColorPreview, Swatch};
pub use render::{RenderOptions, escape_html, render_metadata_table, render_metadata_table_with};

/// Untyped record as returned by `GET <base>/colors`.
pub type RawColorRecord = serde_json::Map<String, serde_json::Value>;

/// Raw key holding the color code. Lookups match on this key only.
pub const CODE_KEY: &str = "colorCode";

/// Canonical, display-ready color record.
///
/// Every field is a string; an empty string means the API did not supply it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorRecord {
    pub name: String,
    pub code: String,
    pub hex: String,
    pub rgb: String,
    pub lrv: String,
    pub family: String,
    pub collection: String,
}

impl ColorRecord {
    /// Human-readable label and value for each field, in table order.
    #[must_use]
    pub fn labeled_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Color Name", self.name.as_str()),
            ("Color Code", self.code.as_str()),
            ("Hex", self.hex.as_str()),
            ("RGB", self.rgb.as_str()),
            ("LRV", self.lrv.as_str()),
            ("Color Family", self.family.as_str()),
            ("Collection", self.collection.as_str()),
        ]
    }
}
