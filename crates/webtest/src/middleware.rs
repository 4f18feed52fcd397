//! Identity-stamping middleware.
//!
//! Promotes the trusted `x-uid` header into an [`AuthnContext`] request
//! extension. This is a test stand-in for a real authentication filter: the
//! header value is trusted as-is and no credentials are verified.

use axum::{
    extract::Request,
    http::{HeaderMap, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::identity::AuthnContext;

/// Header name carrying the caller identity.
pub static X_UID: HeaderName = HeaderName::from_static("x-uid");

/// Extracts the caller uid from request headers.
///
/// Returns `None` when the header is missing, empty, or not valid UTF-8.
pub fn extract_uid(headers: &HeaderMap) -> Option<String> {
    headers
        .get(&X_UID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Middleware function for identity stamping.
///
/// This can be used with `axum::middleware::from_fn`. Requests without an
/// identity header pass through unchanged; rejecting them is left to the
/// [`CurrentUser`] extractor so that public routes keep working.
///
/// [`CurrentUser`]: crate::extractors::CurrentUser
pub async fn stub_authn(mut request: Request, next: Next) -> Response {
    if let Some(uid) = extract_uid(request.headers()) {
        debug!(uid = %uid, "Stamped caller identity");
        request.extensions_mut().insert(AuthnContext::new(uid));
    }

    next.run(request).await
}
