//! Captured responses.
//!
//! A [`TestResponse`] holds what came back from a dispatch: status, headers
//! and the fully collected body, with JSON accessors and chainable assertion
//! helpers for test bodies.

use axum::{
    body::{Bytes, to_bytes},
    http::{HeaderMap, StatusCode, header},
    response::Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::error::{HarnessError, HarnessResult};

/// Captured response from a dispatched request.
#[derive(Debug, Clone)]
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    /// Collects an application response into a descriptor.
    ///
    /// The body is read exactly once, bounded by `limit` bytes.
    pub(crate) async fn from_http(response: Response, limit: usize) -> HarnessResult<Self> {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, limit)
            .await
            .map_err(|source| HarnessError::BodyRead { source })?;

        Ok(Self {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }

    /// Returns the response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the `Content-Type` header, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.header(header::CONTENT_TYPE.as_str())
    }

    /// Returns the raw body bytes.
    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as UTF-8 text.
    pub fn text(&self) -> HarnessResult<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|source| CodecError::NotUtf8 { source }.into())
    }

    /// Parses the body as a JSON value.
    pub fn json(&self) -> HarnessResult<Value> {
        Ok(codec::from_json_bytes(&self.body)?)
    }

    /// Deserializes the body into a typed value.
    pub fn json_as<T: DeserializeOwned>(&self) -> HarnessResult<T> {
        Ok(codec::from_json_bytes(&self.body)?)
    }

    /// Asserts the response has the given status.
    ///
    /// # Panics
    ///
    /// Panics when the status differs; the message includes the response
    /// body to make the failure diagnosable.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "expected status {expected}, got {} (body: {})",
            self.status,
            String::from_utf8_lossy(&self.body),
        );
        self
    }

    /// Asserts a 200 OK response.
    ///
    /// # Panics
    ///
    /// Panics when the status is not 200.
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }
}
