//! Request descriptions.
//!
//! A [`TestRequest`] describes a simulated HTTP request: method, path, query
//! parameters, headers, body and the identity it should carry. Builder
//! methods are infallible except [`TestRequest::json`]; wire-level
//! validation happens once, when the harness resolves the description into
//! an `http::Request`.

use axum::{
    body::{Body, Bytes},
    http::{
        Method, Request,
        header::{self, HeaderName, HeaderValue},
    },
};
use serde::Serialize;
use uuid::Uuid;

use crate::codec;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

/// Header name for request correlation.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Identity a request should carry when dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
enum IdentityDirective {
    /// Use the harness default identity, if any.
    Inherit,
    /// Dispatch as this uid, regardless of the harness default.
    As(String),
    /// Dispatch with no identity, even on an authenticated harness.
    Anonymous,
}

/// Description of a simulated HTTP request.
///
/// # Example
///
/// ```rust,ignore
/// use webtest::TestRequest;
///
/// let request = TestRequest::post("/users")
///     .query("notify", "true")
///     .json(&serde_json::json!({ "name": "Alice" }))?
///     .as_user("admin-uid");
/// ```
#[derive(Debug, Clone)]
pub struct TestRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
    content_type: Option<String>,
    identity: IdentityDirective,
}

impl TestRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            content_type: None,
            identity: IdentityDirective::Inherit,
        }
    }

    /// Describes a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Describes a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Describes a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Describes a PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Describes a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Describes a HEAD request.
    pub fn head(path: impl Into<String>) -> Self {
        Self::new(Method::HEAD, path)
    }

    /// Appends a query parameter.
    ///
    /// Keys and values are percent-encoded when the request is dispatched.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a header.
    ///
    /// Names and values are validated at dispatch; invalid ones surface as
    /// [`HarnessError::InvalidRequest`].
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets `Authorization: Bearer <token>`.
    pub fn bearer(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header("authorization", value)
    }

    /// Sets a JSON body.
    ///
    /// Serializes eagerly so the caller sees serialization failures at the
    /// call site, and marks the body as `application/json`.
    pub fn json<T: Serialize>(mut self, value: &T) -> HarnessResult<Self> {
        let text = codec::to_json(value)?;
        self.body = Some(Bytes::from(text));
        self.content_type = Some(mime::APPLICATION_JSON.to_string());
        Ok(self)
    }

    /// Sets a raw body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type for the body.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Dispatches as the given uid instead of the harness default.
    pub fn as_user(mut self, uid: impl Into<String>) -> Self {
        self.identity = IdentityDirective::As(uid.into());
        self
    }

    /// Dispatches with no identity, even on an authenticated harness.
    pub fn anonymous(mut self) -> Self {
        self.identity = IdentityDirective::Anonymous;
        self
    }

    /// Returns the method of this description.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the path of this description.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolves the description into an HTTP request.
    ///
    /// Applies the harness default identity, the configured base path,
    /// request-id stamping and content-type defaulting, and validates
    /// everything deferred by the builder methods.
    pub(crate) fn into_http(
        self,
        config: &HarnessConfig,
        default_identity: Option<&str>,
    ) -> HarnessResult<Request<Body>> {
        if self.path.is_empty() {
            return Err(HarnessError::invalid_request("path cannot be empty"));
        }
        if !self.path.starts_with('/') {
            return Err(HarnessError::invalid_request(format!(
                "path '{}' must start with '/'",
                self.path
            )));
        }

        let uri = build_uri(&config.base_path, &self.path, &self.query);

        let mut headers: Vec<(HeaderName, HeaderValue)> =
            Vec::with_capacity(self.headers.len() + 3);
        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|_| {
                HarnessError::invalid_request(format!("invalid header name '{name}'"))
            })?;
            let header_value = HeaderValue::try_from(value.as_str()).map_err(|_| {
                HarnessError::invalid_request(format!("invalid value for header '{name}'"))
            })?;
            headers.push((header_name, header_value));
        }

        let identity_header =
            HeaderName::try_from(config.identity_header.as_str()).map_err(|_| {
                HarnessError::invalid_request(format!(
                    "invalid identity header name '{}'",
                    config.identity_header
                ))
            })?;

        // An explicitly set identity header always wins over directives.
        let explicit_identity = headers.iter().any(|(name, _)| *name == identity_header);
        let uid = match &self.identity {
            IdentityDirective::As(uid) => Some(uid.as_str()),
            IdentityDirective::Inherit => default_identity,
            IdentityDirective::Anonymous => None,
        };
        if !explicit_identity {
            if let Some(uid) = uid {
                let value = HeaderValue::try_from(uid).map_err(|_| {
                    HarnessError::invalid_request(format!(
                        "uid '{uid}' is not a valid header value"
                    ))
                })?;
                headers.push((identity_header, value));
            }
        }

        if config.request_id && !headers.iter().any(|(name, _)| *name == X_REQUEST_ID) {
            // UUID strings are always valid header values
            if let Ok(value) = HeaderValue::try_from(Uuid::new_v4().to_string()) {
                headers.push((X_REQUEST_ID.clone(), value));
            }
        }

        let has_content_type = headers
            .iter()
            .any(|(name, _)| *name == header::CONTENT_TYPE);
        let content_type = match (&self.content_type, &self.body) {
            (Some(explicit), _) => Some(explicit.clone()),
            (None, Some(_)) => Some(config.default_content_type.clone()),
            (None, None) => None,
        };
        if !has_content_type {
            if let Some(content_type) = content_type {
                let value = HeaderValue::try_from(content_type.as_str()).map_err(|_| {
                    HarnessError::invalid_request(format!(
                        "invalid content type '{content_type}'"
                    ))
                })?;
                headers.push((header::CONTENT_TYPE, value));
            }
        }

        let mut builder = Request::builder().method(self.method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let body = match self.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| HarnessError::invalid_request(e.to_string()))
    }
}

/// Joins base path, request path and encoded query parameters.
fn build_uri(base_path: &str, path: &str, query: &[(String, String)]) -> String {
    let mut uri = format!("{base_path}{path}");
    if !query.is_empty() {
        let mut encoder = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in query {
            encoder.append_pair(key, value);
        }
        uri.push(if uri.contains('?') { '&' } else { '?' });
        uri.push_str(&encoder.finish());
    }
    uri
}
