//! Harness configuration.
//!
//! Configuration is programmatic: construct a [`HarnessConfig`] with struct
//! update syntax over [`Default`] and hand it to
//! [`WebTestHarness::with_config`].
//!
//! [`WebTestHarness::with_config`]: crate::WebTestHarness::with_config
//!
//! # Example
//!
//! ```rust
//! use webtest::HarnessConfig;
//!
//! let config = HarnessConfig {
//!     base_path: "/api/v1".to_string(),
//!     request_id: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use axum::http::header::HeaderName;

/// Configuration for [`WebTestHarness`].
///
/// [`WebTestHarness`]: crate::WebTestHarness
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Header name the caller identity is written to.
    pub identity_header: String,

    /// Prefix prepended to every request path.
    pub base_path: String,

    /// Maximum response body size in bytes.
    pub max_body_size: usize,

    /// Stamp an `x-request-id` UUID on requests that lack one.
    pub request_id: bool,

    /// Content type applied to request bodies that do not set one.
    pub default_content_type: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            identity_header: "x-uid".to_string(),
            base_path: String::new(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_id: true,
            default_content_type: mime::APPLICATION_JSON.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.identity_header.is_empty() {
            errors.push("Identity header cannot be empty".to_string());
        } else if HeaderName::try_from(self.identity_header.as_str()).is_err() {
            errors.push(format!(
                "Identity header '{}' is not a valid header name",
                self.identity_header
            ));
        }

        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            errors.push("Base path must start with '/'".to_string());
        }

        if self.base_path.ends_with('/') {
            errors.push("Base path must not end with '/'".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.default_content_type.is_empty() {
            errors.push("Default content type cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
