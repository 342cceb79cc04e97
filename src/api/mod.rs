//! Colors API — remote list fetch and code lookup.
//!
//! DESIGN
//! ======
//! The API exposes only the full list, so a lookup fetches everything and
//! scans for the first record whose `colorCode` equals the requested code.
//! `ColorSource` is the seam: the reqwest-backed `ColorApiClient` in
//! production, a canned list in tests.

pub mod client;
pub mod config;
pub mod types;

use tracing::info;

pub use client::ColorApiClient;
pub use config::{ColorApiConfig, ConfigError};
pub use types::{ColorApiError, ColorSource};

use crate::color::{CODE_KEY, RawColorRecord};

/// First record whose `colorCode` is a string exactly equal to `code`.
#[must_use]
pub fn find_color<'a>(colors: &'a [RawColorRecord], code: &str) -> Option<&'a RawColorRecord> {
    colors
        .iter()
        .find(|record| record.get(CODE_KEY).and_then(|v| v.as_str()) == Some(code))
}

/// Fetch the list and return the matching raw record.
///
/// # Errors
///
/// Propagates fetch failures; returns [`ColorApiError::NotFound`] when no
/// record carries `code`.
pub async fn lookup_color(source: &dyn ColorSource, code: &str) -> Result<RawColorRecord, ColorApiError> {
    let colors = source.fetch_colors().await?;
    let Some(record) = find_color(&colors, code) else {
        info!(%code, count = colors.len(), "colors: code not in list");
        return Err(ColorApiError::NotFound(code.to_owned()));
    };
    Ok(record.clone())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
