//! Error types for documentation file resolution and parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading an XML documentation file.
///
/// None of these reach the caller of [`crate::DocumentationProvider`]; the
/// provider logs them and reports "no documentation" instead.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML documentation in {path}: {reason}")]
    Xml { path: PathBuf, reason: String },

    #[error("No <members> element under the document root of {path}")]
    MissingMembers { path: PathBuf },

    #[error("Invalid path character in {0:?}")]
    InvalidPath(String),

    #[error("Path exceeds {limit} bytes: {path}")]
    PathTooLong { path: PathBuf, limit: usize },
}

impl DocError {
    pub(crate) fn xml(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DocError::Xml {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type DocResult<T> = Result<T, DocError>;
