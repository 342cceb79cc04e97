//! Preview card shown before insertion: swatch, title, code and hex lines.

use serde::Serialize;

use super::ColorRecord;

const UNKNOWN_TITLE: &str = "Unknown Color";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// CSS background color; the record's hex value.
    pub background: String,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPreview {
    /// `None` when the record has no hex value; the swatch keeps its default look.
    pub swatch: Option<Swatch>,
    pub title: String,
    pub code_line: String,
    pub hex_line: String,
}

impl ColorPreview {
    #[must_use]
    pub fn from_record(record: &ColorRecord) -> Self {
        let swatch = (!record.hex.is_empty()).then(|| Swatch {
            background: record.hex.clone(),
            aria_label: format!("Color swatch: {}", record.hex),
        });

        Self {
            swatch,
            title: if record.name.is_empty() { UNKNOWN_TITLE.to_owned() } else { record.name.clone() },
            code_line: prefixed("Code", &record.code),
            hex_line: prefixed("Hex", &record.hex),
        }
    }
}

fn prefixed(label: &str, value: &str) -> String {
    if value.is_empty() { String::new() } else { format!("{label}: {value}") }
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
