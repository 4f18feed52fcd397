//! # webtest - In-Process HTTP Test Harness
//!
//! This crate lets integration tests exercise a complete axum application
//! without binding a socket. A [`WebTestHarness`] wraps the application's
//! `Router` and dispatches simulated requests through the full middleware
//! and handler stack via `tower::ServiceExt::oneshot`, returning captured
//! responses with JSON accessors and assertion helpers.
//!
//! ## Features
//!
//! - **In-process dispatch**: Requests run through the real handler graph;
//!   no port, no listener, no client.
//! - **Authenticated identity**: A fixed [`TEST_UID`] every dispatched
//!   request can authenticate as, with per-request overrides.
//! - **JSON codec**: One place to serialize request payloads and
//!   deserialize response bodies, with distinguishable error values.
//! - **Fixtures**: Object-mother builders for identity-shaped payloads.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use webtest::{CurrentUser, WebTestHarness, TEST_UID};
//!
//! async fn me(user: CurrentUser) -> String {
//!     user.uid().to_string()
//! }
//!
//! #[tokio::test]
//! async fn test_me_returns_the_test_identity() {
//!     let app = Router::new().route("/me", get(me));
//!     let harness = WebTestHarness::authenticated(app);
//!
//!     let response = harness.get("/me").await.unwrap();
//!     response.assert_ok();
//!     assert_eq!(response.text().unwrap(), TEST_UID);
//! }
//! ```
//!
//! ## Identity Model
//!
//! | Piece | Role |
//! |-------|------|
//! | [`TEST_UID`] | Fixed uid (`test-user-uid`) dispatched requests authenticate as |
//! | [`middleware::stub_authn`] | Promotes the `x-uid` header into an [`AuthnContext`] extension |
//! | [`extractors::CurrentUser`] | Handler-side extractor; rejects with a structured 401 when no identity is present |
//!
//! The stamping middleware trusts the header as-is. It is a test stand-in,
//! not an authentication engine: no tokens are parsed and no credentials
//! are verified.
//!
//! ## Error Handling
//!
//! | Failure | Surface |
//! |---------|---------|
//! | Unserializable payload | [`CodecError::Serialize`] via [`HarnessError::Codec`] |
//! | Unbuildable request description | [`HarnessError::InvalidRequest`] |
//! | Unreadable response body | [`HarnessError::BodyRead`] |
//! | Invalid harness configuration | [`HarnessError::Config`] |
//! | Handler-level failures (401, 404, 500...) | Not errors: captured in the [`TestResponse`] status |
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`harness`] - The dispatch harness
//! - [`request`] - Request descriptions
//! - [`response`] - Captured responses
//! - [`codec`] - JSON serialization helpers
//! - [`identity`] - The fixed test identity and caller context
//! - [`middleware`] - Identity-stamping middleware
//! - [`extractors`] - Authenticated-caller extractor
//! - [`config`] - Harness configuration
//! - [`fixtures`] - Object-mother test fixtures

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fixtures;
pub mod harness;
pub mod identity;
pub mod middleware;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use codec::{CodecError, from_json, to_json};
pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use extractors::{AuthnRejection, CurrentUser};
pub use harness::WebTestHarness;
pub use identity::{AuthnContext, TEST_UID};
pub use request::TestRequest;
pub use response::TestResponse;

/// Initializes logging for test runs.
///
/// Respects `RUST_LOG` when set, otherwise uses the given level. Safe to
/// call from multiple tests in one binary; only the first call installs a
/// subscriber.
///
/// # Arguments
///
/// * `level` - Default log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("webtest={level}")));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
