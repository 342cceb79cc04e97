//! Editor host — the two capabilities the assistant borrows from its host.
//!
//! DESIGN
//! ======
//! The host editor owns the document. The assistant only needs to know which
//! page is open (`context`) and to drop markup at the cursor
//! (`insert_html`). Keeping the seam this narrow lets the assistant run
//! against a fake host in tests and against `CliHost` from the command line.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use crate::error::ErrorCode;

// =============================================================================
// TYPES
// =============================================================================

/// What the host tells us about the open document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Document path, e.g. `/colors/color-detail/BEHR-001`. `None` when the
    /// host has no document open.
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host exposes no insertion capability.
    #[error("editor connection unavailable")]
    Unavailable,

    /// The host accepted the call but could not write the markup.
    #[error("insert failed: {0}")]
    Insert(String),
}

impl ErrorCode for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable => "E_HOST_UNAVAILABLE",
            Self::Insert(_) => "E_HOST_INSERT",
        }
    }
}

// =============================================================================
// EDITOR HOST TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait EditorHost: Send + Sync {
    /// Current document context.
    async fn context(&self) -> HostContext;

    /// Insert an HTML fragment at the current cursor.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Unavailable`] when the host cannot insert at all.
    async fn insert_html(&self, html: &str) -> Result<(), HostError>;
}

// =============================================================================
// CLI HOST
// =============================================================================

/// Where `CliHost` writes inserted markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertTarget {
    Stdout,
    File(PathBuf),
}

impl InsertTarget {
    /// `-` means stdout; anything else is a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "-" { Self::Stdout } else { Self::File(PathBuf::from(raw)) }
    }
}

/// Host backed by command-line arguments: the path comes from argv and
/// inserted markup goes to a file or stdout.
#[derive(Debug, Clone)]
pub struct CliHost {
    path: String,
    target: Option<InsertTarget>,
}

impl CliHost {
    #[must_use]
    pub fn new(path: impl Into<String>, target: Option<InsertTarget>) -> Self {
        Self { path: path.into(), target }
    }
}

#[async_trait::async_trait]
impl EditorHost for CliHost {
    async fn context(&self) -> HostContext {
        HostContext { path: Some(self.path.clone()) }
    }

    async fn insert_html(&self, html: &str) -> Result<(), HostError> {
        match &self.target {
            None => Err(HostError::Unavailable),
            Some(InsertTarget::Stdout) => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(format!("{html}\n").as_bytes())
                    .await
                    .map_err(|e| HostError::Insert(e.to_string()))?;
                stdout.flush().await.map_err(|e| HostError::Insert(e.to_string()))
            }
            Some(InsertTarget::File(path)) => tokio::fs::write(path, html)
                .await
                .map_err(|e| HostError::Insert(format!("{}: {e}", path.display()))),
        }
    }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;
