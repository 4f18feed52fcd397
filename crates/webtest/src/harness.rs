//! The dispatch harness.
//!
//! [`WebTestHarness`] drives a complete axum application in process:
//! requests are resolved from [`TestRequest`] descriptions and sent through
//! the router's full middleware and handler stack with
//! `tower::ServiceExt::oneshot`, so nothing ever touches a network socket.

use std::sync::Arc;

use axum::{Router, middleware};
use serde::Serialize;
use tower::ServiceExt;
use tracing::debug;

use crate::codec;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::identity::TEST_UID;
use crate::middleware::stub_authn;
use crate::request::TestRequest;
use crate::response::TestResponse;

/// In-process test harness around an axum application.
///
/// The harness owns a clone of the application router; each dispatch drives
/// a fresh clone of it, so one harness serves any number of requests and
/// repeat dispatches are independent of each other.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get};
/// use webtest::{CurrentUser, WebTestHarness, TEST_UID};
///
/// async fn me(user: CurrentUser) -> String {
///     user.uid().to_string()
/// }
///
/// let app = Router::new().route("/me", get(me));
/// let harness = WebTestHarness::authenticated(app);
///
/// let response = harness.get("/me").await?;
/// response.assert_ok();
/// assert_eq!(response.text()?, TEST_UID);
/// ```
#[derive(Clone)]
pub struct WebTestHarness {
    app: Router,
    config: Arc<HarnessConfig>,
    identity: Option<String>,
}

impl WebTestHarness {
    /// Creates a harness with default configuration and no default identity.
    ///
    /// The application is wrapped with the identity-stamping middleware, so
    /// per-request identities ([`TestRequest::as_user`]) still resolve even
    /// when the application mounts no identity plumbing of its own.
    pub fn new(app: Router) -> Self {
        Self {
            app: app.layer(middleware::from_fn(stub_authn)),
            config: Arc::new(HarnessConfig::default()),
            identity: None,
        }
    }

    /// Creates a harness whose requests are authenticated as [`TEST_UID`].
    ///
    /// Every dispatched request carries the fixed test identity unless the
    /// request overrides it ([`TestRequest::as_user`]) or opts out
    /// ([`TestRequest::anonymous`]).
    pub fn authenticated(app: Router) -> Self {
        Self::new(app).with_identity(TEST_UID)
    }

    /// Creates a harness with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when the configuration fails
    /// validation; nothing can be dispatched from an invalid setup.
    pub fn with_config(app: Router, config: HarnessConfig) -> HarnessResult<Self> {
        if let Err(problems) = config.validate() {
            return Err(HarnessError::config(problems));
        }

        Ok(Self {
            app: app.layer(middleware::from_fn(stub_authn)),
            config: Arc::new(config),
            identity: None,
        })
    }

    /// Sets the default identity attached to dispatched requests.
    pub fn with_identity(mut self, uid: impl Into<String>) -> Self {
        self.identity = Some(uid.into());
        self
    }

    /// Returns the harness configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Dispatches a request description through the application.
    ///
    /// Application-level failures come back as captured responses with error
    /// statuses; only failures of the harness machinery itself (unbuildable
    /// requests, unreadable bodies) surface as errors.
    pub async fn dispatch(&self, request: TestRequest) -> HarnessResult<TestResponse> {
        debug!(method = %request.method(), path = %request.path(), "Dispatching request");

        let http_request = request.into_http(&self.config, self.identity.as_deref())?;
        let response = match self.app.clone().oneshot(http_request).await {
            Ok(response) => response,
            Err(infallible) => match infallible {},
        };
        debug!(status = %response.status(), "Collected response");

        TestResponse::from_http(response, self.config.max_body_size).await
    }

    /// Dispatches a GET request to the given path.
    pub async fn get(&self, path: &str) -> HarnessResult<TestResponse> {
        self.dispatch(TestRequest::get(path)).await
    }

    /// Dispatches a DELETE request to the given path.
    pub async fn delete(&self, path: &str) -> HarnessResult<TestResponse> {
        self.dispatch(TestRequest::delete(path)).await
    }

    /// Dispatches a POST request with a JSON body.
    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> HarnessResult<TestResponse> {
        self.dispatch(TestRequest::post(path).json(body)?).await
    }

    /// Dispatches a PUT request with a JSON body.
    pub async fn put_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> HarnessResult<TestResponse> {
        self.dispatch(TestRequest::put(path).json(body)?).await
    }

    /// Dispatches a PATCH request with a JSON body.
    pub async fn patch_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> HarnessResult<TestResponse> {
        self.dispatch(TestRequest::patch(path).json(body)?).await
    }

    /// Serializes a value to a JSON string.
    ///
    /// Convenience delegate for tests that build request bodies by hand;
    /// equivalent to [`codec::to_json`].
    pub fn to_json<T: Serialize>(&self, value: &T) -> HarnessResult<String> {
        Ok(codec::to_json(value)?)
    }
}
