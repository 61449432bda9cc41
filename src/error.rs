//! Error types for loading and parsing log files
//!
//! Two failure kinds with different propagation:
//!
//! - [`LoadError`] is fatal. Either the file could not be opened or read, so nothing is
//!   processed, or the diagnostics sink stopped accepting output mid-ingestion.
//! - [`ParseError`] is recoverable. One line is skipped and ingestion continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Ingestion could not finish
///
/// [`LoadError::is_file_error`] separates problems with the log file from a broken
/// diagnostics sink.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The file '{}' was not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("An unexpected error occurred while loading the file: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a malformed-line diagnostic failed; the log file itself was read fine
    #[error("Failed to write diagnostic output")]
    Diagnostics(#[source] io::Error),
}

impl LoadError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::Io { path, source },
        }
    }

    /// True when the log file could not be opened or read
    pub fn is_file_error(&self) -> bool {
        matches!(self, LoadError::NotFound { .. } | LoadError::Io { .. })
    }
}

/// A single line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than the three required fields (date, time, level)
    #[error("expected at least 3 whitespace-separated fields, found {found}")]
    TooFewFields { found: usize },
}
