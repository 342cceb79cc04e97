//! Error codes shared by every error surface.
//!
//! Each module owns its own `thiserror` enum. `ErrorCode` gives those enums a
//! stable, grepable code so the HTTP surface and the CLI can report failures
//! without matching on display strings.

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
