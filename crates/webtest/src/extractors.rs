//! Authenticated-caller extractor.
//!
//! Extracts the [`AuthnContext`] stamped by [`stub_authn`] and rejects with
//! a structured 401 JSON body when no identity is present.
//!
//! [`stub_authn`]: crate::middleware::stub_authn

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use crate::identity::AuthnContext;

/// Error code for requests that reach an identity-gated handler without
/// credentials.
pub const MISSING_CREDENTIALS: &str = "AUTH.MISSING_CREDENTIALS";

/// Axum extractor for the authenticated caller.
///
/// Handlers taking a `CurrentUser` argument only run for requests that carry
/// an identity; everything else is answered with the 401 body rendered by
/// [`AuthnRejection`].
///
/// # Example
///
/// ```rust,ignore
/// use webtest::CurrentUser;
///
/// async fn me(user: CurrentUser) -> String {
///     format!("hello {}", user.uid())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    context: AuthnContext,
}

impl CurrentUser {
    /// Returns the authenticated user ID.
    pub fn uid(&self) -> &str {
        self.context.uid()
    }

    /// Returns the underlying caller context.
    pub fn context(&self) -> &AuthnContext {
        &self.context
    }

    /// Consumes the extractor, returning the caller context.
    pub fn into_context(self) -> AuthnContext {
        self.context
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthnRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthnContext>() {
            Some(context) => Ok(CurrentUser {
                context: context.clone(),
            }),
            None => Err(AuthnRejection::missing_credentials(parts.uri.path())),
        }
    }
}

/// Rejection returned when no caller identity is present.
///
/// Renders as a JSON error body:
///
/// ```json
/// {
///   "timestamp": "2025-01-01T00:00:00+00:00",
///   "status": 401,
///   "error": "Unauthorized",
///   "error_code": "AUTH.MISSING_CREDENTIALS",
///   "message": "Authentication required",
///   "path": "/users/me"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthnRejection {
    status: StatusCode,
    error_code: &'static str,
    message: String,
    path: String,
}

impl AuthnRejection {
    /// Rejection for a request that carried no identity at all.
    pub fn missing_credentials(path: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error_code: MISSING_CREDENTIALS,
            message: "Authentication required".to_string(),
            path: path.to_string(),
        }
    }

    /// Returns the HTTP status of the rejection.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the machine-readable error code.
    pub fn error_code(&self) -> &str {
        self.error_code
    }
}

impl IntoResponse for AuthnRejection {
    fn into_response(self) -> Response {
        let body = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": self.status.as_u16(),
            "error": self.status.canonical_reason().unwrap_or("Unknown"),
            "error_code": self.error_code,
            "message": self.message,
            "path": self.path,
        });

        (self.status, Json(body)).into_response()
    }
}
