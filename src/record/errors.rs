//! Loader error types
//!
//! The loader is the only fallible part of the record subsystem. Once a
//! collection is in memory, every engine function over it is total.

use thiserror::Error;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors reading a record collection from disk
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path as given by the caller
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of record objects
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path as given by the caller
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
