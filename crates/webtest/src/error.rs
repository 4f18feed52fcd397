//! Error types for harness operations.
//!
//! Application-level failures are deliberately not represented here: a
//! handler answering 404 or 500 is a successful dispatch whose status is
//! carried by the captured response. Only failures of the harness machinery
//! itself surface as [`HarnessError`].

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::codec::CodecError;

/// Result type alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// The primary error type for harness operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// JSON encoding or decoding errors
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The request description could not be turned into an HTTP request.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// The response body could not be collected.
    #[error("failed to read response body: {source}")]
    BodyRead {
        #[source]
        source: axum::Error,
    },

    /// The harness configuration failed validation.
    #[error("invalid configuration: {problems}")]
    Config { problems: String },
}

impl HarnessError {
    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        HarnessError::InvalidRequest {
            message: message.into(),
        }
    }

    pub(crate) fn config(problems: Vec<String>) -> Self {
        HarnessError::Config {
            problems: problems.join("; "),
        }
    }
}
