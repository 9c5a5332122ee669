//! Error types for the endpoint layer.
//!
//! # Design
//! A status mismatch and an undecodable body are the two failures a caller
//! asserts against, so each has its own variant. Neither is ever retried or
//! swallowed. `Transport` covers exchanges that never produced a status.

use thiserror::Error;

use crate::http::HttpMethod;
use crate::status::HttpStatus;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the expected one.
    #[error("{method} {url}: expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        method: HttpMethod,
        url: String,
        expected: HttpStatus,
        actual: HttpStatus,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    #[error("{method} {url} failed: {message}")]
    Transport {
        method: HttpMethod,
        url: String,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Actual status of an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<HttpStatus> {
        match self {
            ApiError::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}
