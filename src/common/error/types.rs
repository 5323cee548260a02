//! Unified error types for the lection library.
//!
//! This module provides one error type covering local data sources, remote
//! resolution, and configuration parsing, presenting a consistent API to
//! callers.
use thiserror::Error;

/// Main error type for lection operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A local record source is missing or malformed. Fatal at load time.
    #[error("data source '{name}' unavailable: {reason}")]
    DataUnavailable { name: String, reason: String },

    /// A configuration string has the wrong shape
    #[error("malformed reference: {0}")]
    MalformedReference(String),

    /// The book name is not present in the chapter-code index
    #[error("unknown chapter: {0}")]
    UnknownChapter(String),

    /// The remote scripture source failed: a non-success status (`status`
    /// carries the observed code) or a transport/timeout failure before any
    /// response arrived (`status` is `None`). Never retried.
    #[error("scripture source unavailable: {reason}")]
    UpstreamUnavailable { status: Option<u16>, reason: String },

    /// No responsive reading carries the requested index
    #[error("no responsive reading with index {0}")]
    ReadingNotFound(u32),
}

/// Result type for lection operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `DataUnavailable` for a named source.
    pub(crate) fn data_unavailable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::DataUnavailable {
            name: source.into(),
            reason: reason.into(),
        }
    }
}
