//! Error taxonomy for fftabs.
//!
//! A `thiserror` enum carrying the failure tiers the library distinguishes,
//! plus a [`Result`] alias. The binary boundary wraps these in `anyhow` and
//! prints the error chain to stderr.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The error taxonomy for decoding Firefox profile containers and projecting
/// their JSON documents.
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable (e.g. `$HOME`) was not set.
    #[error("environment error: {0}")]
    Environment(String),

    /// An I/O operation on a path failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path the operation was performed on.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The `profiles.ini` configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// An expected file or entry could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The container framing was malformed (magic, header, size).
    #[error("format error: {0}")]
    Format(String),

    /// The compressed payload could not be decompressed.
    #[error("corrupt data: {0}")]
    CorruptData(String),

    /// A JSON document did not match the expected schema.
    #[error("schema error: {0}")]
    Schema(String),

    /// A JSON parse or serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::Io`] from a path and an underlying I/O error.
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
