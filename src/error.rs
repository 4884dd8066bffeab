//! Error types for find-usages operations.

use thiserror::Error;

use crate::base::FileId;

/// Errors that can occur while building or collecting find-usages results.
///
/// A location that no longer resolves to a document is not an error: it is
/// dropped where it is encountered and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindUsagesError {
    /// A reference item was requested for a location outside of source.
    #[error("reference location is not in source")]
    NotInSource,

    /// The document a request was made against is not in the solution.
    #[error("document not found: {0}")]
    DocumentNotFound(FileId),

    /// The request position does not exist in its document.
    #[error("invalid position {line}:{col}")]
    InvalidPosition { line: u32, col: u32 },

    /// The operation observed its cancellation token.
    #[error("operation was cancelled")]
    Cancelled,

    /// A host service (search engine, classifier) failed.
    #[error("{service} failed: {message}")]
    External {
        service: &'static str,
        message: String,
    },
}

impl FindUsagesError {
    /// Create an external service failure.
    pub fn external(service: &'static str, message: impl Into<String>) -> Self {
        Self::External {
            service,
            message: message.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, FindUsagesError>;

/// Fail fast with [`FindUsagesError::Cancelled`] if `token` is signalled.
pub fn check_cancelled(token: &tokio_util::sync::CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        Err(FindUsagesError::Cancelled)
    } else {
        Ok(())
    }
}
