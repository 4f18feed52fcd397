//! JSON body assertions.
//!
//! Provides path-based assertion utilities for captured response bodies.

use jsonpath_rust::JsonPath;
use serde_json::Value;

/// Asserts that a JSON body has the expected value at a JSON path.
pub fn assert_json_path(body: &Value, path: &str, expected: impl Into<Value>) {
    let expected = expected.into();
    let finder = JsonPath::try_from(path).expect("valid JSON path");
    let found = finder.find(body);
    let matched = match &found {
        Value::Array(items) => items.iter().any(|v| *v == expected),
        other => *other == expected,
    };
    assert!(
        matched,
        "Expected {} at path {}, found {}",
        expected, path, found
    );
}

/// Asserts that a JSON body is a structured error with the expected status
/// and error code.
pub fn assert_error_body(body: &Value, status: u16, error_code: &str) {
    assert_eq!(
        body.get("status").and_then(|v| v.as_u64()),
        Some(u64::from(status)),
        "Expected error status {}, got {}",
        status,
        body
    );
    assert_eq!(
        body.get("error_code").and_then(|v| v.as_str()),
        Some(error_code),
        "Expected error code {}, got {}",
        error_code,
        body
    );
    assert!(
        body.get("timestamp").map(|v| v.is_string()).unwrap_or(false),
        "Expected a timestamp in {}",
        body
    );
}
