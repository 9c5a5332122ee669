//! Responses whose status has already been asserted.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpResponse};
use crate::status::HttpStatus;

/// An `HttpResponse` that passed its status assertion.
///
/// Only `ValidatedResponse::check` constructs one, so a body can never be
/// extracted from a response whose status did not match.
#[derive(Debug, Clone)]
pub struct ValidatedResponse {
    inner: HttpResponse,
}

impl ValidatedResponse {
    pub(crate) fn check(
        response: HttpResponse,
        expected: HttpStatus,
        method: HttpMethod,
        url: &str,
    ) -> Result<Self> {
        if expected.matches(response.status) {
            return Ok(Self { inner: response });
        }
        Err(ApiError::UnexpectedStatus {
            method,
            url: url.to_string(),
            expected,
            actual: HttpStatus::from(response.status),
            body: response.body,
        })
    }

    pub fn status(&self) -> HttpStatus {
        HttpStatus::from(self.inner.status)
    }

    pub fn body(&self) -> &str {
        &self.inner.body
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.header(name)
    }

    /// Decode the body as JSON.
    pub fn extract<D: DeserializeOwned>(&self) -> Result<D> {
        serde_json::from_str(&self.inner.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn into_inner(self) -> HttpResponse {
        self.inner
    }
}
