//! Renderer — canonical record to the editor's metadata table markup.
//!
//! The markup matches what the document editor produces for a two-column
//! block table whose first row names the block (`metadata`). Empty fields
//! produce no row. Values are inserted verbatim unless `RenderOptions::escape`
//! is set; the colors API is a single trusted source.

use super::ColorRecord;

const TABLE_OPEN: &str = r#"<div class="tableWrapper"><table style="min-width: 25px;"><colgroup><col><col></colgroup><tbody>"#;
const HEADER_ROW: &str = r#"<tr><td colspan="2"><p>metadata</p></td></tr>"#;
const TABLE_CLOSE: &str = "</tbody></table></div>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape labels and values. Off by default.
    pub escape: bool,
}

/// Render the metadata table with values inserted verbatim.
#[must_use]
pub fn render_metadata_table(record: &ColorRecord) -> String {
    render_metadata_table_with(record, RenderOptions::default())
}

#[must_use]
pub fn render_metadata_table_with(record: &ColorRecord, options: RenderOptions) -> String {
    let mut html = String::from(TABLE_OPEN);
    html.push_str(HEADER_ROW);

    for (label, value) in record.labeled_fields() {
        if value.is_empty() {
            continue;
        }
        let value = if options.escape { escape_html(value) } else { value.to_owned() };
        html.push_str(&format!("<tr><td><p>{label}</p></td><td><p>{value}</p></td></tr>"));
    }

    html.push_str(TABLE_CLOSE);
    html
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
