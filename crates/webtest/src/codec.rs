//! JSON serialization helpers.
//!
//! Thin wrappers over `serde_json` giving harness callers one place to
//! serialize request payloads and deserialize response bodies, with error
//! values that distinguish the two directions.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from JSON encoding and decoding.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A value could not be serialized to JSON.
    #[error("serialization failed: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// Text or bytes could not be deserialized into the requested type.
    #[error("deserialization failed: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    /// A body was not valid UTF-8.
    #[error("body is not valid utf-8: {source}")]
    NotUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Serializes a value to a compact JSON string.
///
/// Struct fields appear in declaration order, so a struct with a single
/// `name` field set to `"a"` serializes as `{"name":"a"}`.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] for values JSON cannot represent, such
/// as maps with non-string keys.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(|source| CodecError::Serialize { source })
}

/// Deserializes a value from JSON text.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    serde_json::from_str(text).map_err(|source| CodecError::Deserialize { source })
}

/// Deserializes a value from raw JSON bytes.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(|source| CodecError::Deserialize { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Profile {
        uid: String,
        name: String,
        active: bool,
        logins: u32,
    }

    #[test]
    fn test_single_field_struct_serializes_compactly() {
        let value = Named {
            name: "a".to_string(),
        };
        assert_eq!(to_json(&value).expect("serialize"), r#"{"name":"a"}"#);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let value = Profile {
            uid: "test-user-uid".to_string(),
            name: "Test User".to_string(),
            active: true,
            logins: 3,
        };
        let first = to_json(&value).expect("serialize");
        let second = to_json(&value).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let value = Profile {
            uid: "test-user-uid".to_string(),
            name: "Test User".to_string(),
            active: false,
            logins: 0,
        };
        let text = to_json(&value).expect("serialize");
        let back: Profile = from_json(&text).expect("deserialize");
        assert_eq!(back, value);
    }

    #[test]
    fn test_round_trip_preserves_json_value() {
        let value = serde_json::json!({
            "name": "a",
            "nested": { "list": [1, 2, 3], "flag": true },
        });
        let text = to_json(&value).expect("serialize");
        let back: serde_json::Value = from_json(&text).expect("deserialize");
        assert_eq!(back, value);
    }

    #[test]
    fn test_unsupported_value_fails_with_serialize_error() {
        // serde_json rejects maps whose keys are not strings
        let mut map: HashMap<Vec<u8>, &str> = HashMap::new();
        map.insert(vec![1, 2], "x");

        let err = to_json(&map).expect_err("serialization should fail");
        assert!(matches!(err, CodecError::Serialize { .. }));
        assert!(err.to_string().starts_with("serialization failed"));
    }

    #[test]
    fn test_malformed_text_fails_with_deserialize_error() {
        let err = from_json::<Named>("{\"name\":").expect_err("deserialization should fail");
        assert!(matches!(err, CodecError::Deserialize { .. }));
        assert!(err.to_string().starts_with("deserialization failed"));
    }

    #[test]
    fn test_from_json_bytes() {
        let value: Named = from_json_bytes(br#"{"name":"a"}"#).expect("deserialize");
        assert_eq!(value.name, "a");
    }
}
