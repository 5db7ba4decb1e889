use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in the `patchlet` application.
///
/// A missing search snippet is not an error; it is reported through
/// [`crate::patcher::PatchOutcome::NotFound`].
#[derive(Error, Debug)]
pub enum Error {
    /// The target file could not be read, decoded as UTF-8, or staged for writing.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The staged temporary file could not be renamed over the target.
    #[error("Tempfile error: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A patch was given an empty search string.
    #[error("Search pattern must not be empty")]
    EmptySearch,

    /// An error related to JSON serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// A convenient type alias for `Result<T, patchlet::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
