//! Error types for collision-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in collision-core
#[derive(Debug, Error)]
pub enum Error {
    /// A tabular input could not be opened, decoded or tokenised
    #[error("failed to read input '{path}': {reason}")]
    InputUnreadable { path: PathBuf, reason: String },

    /// The profile matrix has no rows, so no profile names can be derived
    #[error("profile matrix '{path}' is empty")]
    EmptyMatrix { path: PathBuf },

    /// One of the canonical input files was not found during discovery
    #[error("could not find '{name}' under '{root}'")]
    SourceNotFound { name: String, root: PathBuf },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::InputUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
