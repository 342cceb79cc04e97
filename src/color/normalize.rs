//! Normalizer — raw API record to canonical `ColorRecord`.
//!
//! Total and pure: any JSON object, including an empty one, yields a record
//! with all seven fields set. Missing or falsy values become `""`.

use serde_json::{Number, Value};

use super::{CODE_KEY, ColorRecord, RawColorRecord};

const NAME_KEY: &str = "colorName";
const HEX_KEY: &str = "rgbHex";
const RGB_KEYS: [&str; 2] = ["rgb", "rgbValue"];
const RGB_CHANNEL_KEYS: [&str; 3] = ["r", "g", "b"];
const LRV_KEY: &str = "lrv";
const FAMILY_KEY: &str = "colorFamily";
const COLLECTION_KEYS: [&str; 2] = ["collection", "colorCollection"];

/// Resolve a raw record into the canonical shape. First present key wins.
#[must_use]
pub fn normalize(raw: &RawColorRecord) -> ColorRecord {
    ColorRecord {
        name: first_present(raw, &[NAME_KEY]),
        code: first_present(raw, &[CODE_KEY]),
        hex: first_present(raw, &[HEX_KEY]),
        rgb: resolve_rgb(raw),
        lrv: first_present(raw, &[LRV_KEY]),
        family: first_present(raw, &[FAMILY_KEY]),
        collection: first_present(raw, &COLLECTION_KEYS),
    }
}

fn first_present(raw: &RawColorRecord, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(display_value))
        .unwrap_or_default()
}

/// Joined forms first, then `r, g, b` when all three channels exist.
fn resolve_rgb(raw: &RawColorRecord) -> String {
    let joined = first_present(raw, &RGB_KEYS);
    if !joined.is_empty() {
        return joined;
    }

    let channels: Option<Vec<String>> = RGB_CHANNEL_KEYS
        .iter()
        .map(|key| raw.get(*key).and_then(channel_value))
        .collect();

    channels.map(|c| c.join(", ")).unwrap_or_default()
}

/// Display text for a field value. Empty strings, zero, `false`, `null`,
/// arrays and objects all count as absent.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if !is_zero(n) => Some(number_text(n)),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

/// Channel values only need to exist; `0` is a valid channel.
fn channel_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Exactly zero; tiny non-zero values such as `1e-20` are still present.
#[allow(clippy::float_cmp)]
fn is_zero(n: &Number) -> bool {
    n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64().is_some_and(|f| f == 0.0)
}

/// Number as display text. Integral floats drop the fraction, so `58.0`
/// reads `58` and `-0.0` reads `0`.
#[allow(clippy::float_cmp)]
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 { "0".to_owned() } else { format!("{f:.0}") }
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
