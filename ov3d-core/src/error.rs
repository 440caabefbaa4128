//! Error types for mesh loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Fatal conditions for a load attempt.
///
/// Only these two conditions abort a load. Everything else the parser
/// encounters (malformed numerics, unusable face indices) is recovered line
/// by line and surfaced as a warning.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened for reading.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No vertices survived parsing.
    #[error("mesh contains no vertices")]
    EmptyMesh,
}
