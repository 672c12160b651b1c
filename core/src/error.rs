//! Error types for the backend API client.
//!
//! # Design
//! Transport failures and non-2xx statuses are surfaced exactly as they
//! happened: the status code and raw body are kept so callers can inspect
//! them. `MissingPayload` is the only client-side precondition and is raised
//! before any request is built.

use thiserror::Error;

/// Errors returned by `ApiClient` and the resource wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// An operation that needs a payload was called without one.
    #[error("{operation} requires a payload")]
    MissingPayload { operation: &'static str },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The configured base URL is not a usable origin.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Status code of a `Status` error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 401 or 403, the statuses the response error hook exists for.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
