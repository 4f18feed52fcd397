//! The fixed test identity and the authenticated-caller context.
//!
//! Requests dispatched through an authenticated harness carry [`TEST_UID`],
//! a stable uid that handler code can rely on across every test in a suite.
//! [`AuthnContext`] is the extension type the identity travels in once a
//! request enters the application.

/// Fixed user ID that harness-driven requests authenticate as.
///
/// Harnesses created with [`WebTestHarness::authenticated`] attach this
/// identity to every dispatched request, so handlers resolving the current
/// user observe a known, stable uid without any real credentials in play.
///
/// [`WebTestHarness::authenticated`]: crate::WebTestHarness::authenticated
pub const TEST_UID: &str = "test-user-uid";

/// Authenticated-caller context carried in request extensions.
///
/// [`stub_authn`] inserts this for requests carrying an identity header, and
/// [`CurrentUser`] reads it back out inside handlers.
///
/// [`stub_authn`]: crate::middleware::stub_authn
/// [`CurrentUser`]: crate::extractors::CurrentUser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthnContext {
    uid: String,
}

impl AuthnContext {
    /// Creates a context for the given uid.
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    /// Returns the authenticated user ID.
    pub fn uid(&self) -> &str {
        &self.uid
    }
}
