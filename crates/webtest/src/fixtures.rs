//! Object-mother test fixtures.
//!
//! Canned payload builders for identity-shaped data, plus [`unique_uid`] for
//! tests that need identities distinct from the fixed [`TEST_UID`].
//!
//! [`TEST_UID`]: crate::TEST_UID

use chrono::Utc;
use serde_json::{Value, json};

/// Returns a uid unique to the moment of the call.
///
/// Shaped as `test-uid-<millis>`, which keeps fixture identities
/// recognizable in logs while staying distinct across test runs.
pub fn unique_uid() -> String {
    format!("test-uid-{}", Utc::now().timestamp_millis())
}

/// Builder for a user payload.
///
/// # Example
///
/// ```rust
/// use webtest::fixtures::TestUser;
///
/// let body = TestUser::new().with_name("Alice").to_json();
/// assert_eq!(body["name"], "Alice");
/// ```
#[derive(Debug, Clone)]
pub struct TestUser {
    uid: String,
    name: String,
    email: String,
}

impl TestUser {
    /// Creates a user with a unique uid and default name and email.
    pub fn new() -> Self {
        Self {
            uid: unique_uid(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    /// Sets the uid.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Returns the uid.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Builds the JSON payload.
    pub fn to_json(&self) -> Value {
        json!({
            "uid": self.uid,
            "name": self.name,
            "email": self.email,
        })
    }
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new()
    }
}
