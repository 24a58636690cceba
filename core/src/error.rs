//! Error types for the catalog API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so a lookup can tell "no such item"
//! apart from a failed request. Every other non-2xx response lands in
//! `HttpError` with the raw status and body for the log.

use thiserror::Error;

/// Errors returned by `CatalogClient` parse methods and by hosts executing
/// requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Status,
    Transport,
    Malformed,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::HttpError { .. } => ErrorKind::Status,
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Deserialization(_) | ApiError::Serialization(_) => ErrorKind::Malformed,
        }
    }
}
