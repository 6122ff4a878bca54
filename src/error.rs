//! Error types for listing and sampling
//!
//! Extraction itself has no error type: malformed markup degrades to partial
//! or empty text instead of failing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sampling runs
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Failures that stop a directory listing before it starts
#[derive(Debug, Error)]
pub enum ListError {
    /// Root path does not exist
    #[error("The path supplied does not exist: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Root path exists but is a file
    #[error("Please provide a directory not a file path: {}", .0.display())]
    NotDirectory(PathBuf),

    /// Root metadata could not be read for another reason (permissions, etc.)
    #[error("Failed to inspect {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures that abort a sampling run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    List(#[from] ListError),

    /// Writing the report failed (closed pipe, full disk)
    #[error("Failed to write sample output: {0}")]
    Output(#[from] io::Error),
}

impl ScrapeError {
    /// Root path problems are user errors and get a one-line diagnostic
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(
            self,
            ScrapeError::List(ListError::InvalidPath(_) | ListError::NotDirectory(_))
        )
    }
}
