//! Payload serialization utilities.

use bytes::Bytes;
use serde_json::Value;

use crate::Result;

/// Media type of the bodies sent by the HTTP transport.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use crudline_core::{json, to_json};
///
/// let bytes = to_json(&json!({ "name": "Alice" })).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Decode a raw body into a payload.
///
/// JSON bodies are parsed; anything else becomes a JSON string (lossy UTF-8),
/// and an empty body becomes `null`.
#[must_use]
pub fn decode_data(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Deserialize a payload into a typed value with path-aware error messages.
///
/// # Errors
///
/// Returns an error if deserialization fails, with the error message
/// including the path to the problematic field (e.g., "user.address.city").
///
/// # Example
///
/// ```
/// use crudline_core::{from_data, json};
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { name: String }
///
/// let user: User = from_data(&json!({ "name": "Alice" })).expect("deserialize");
/// assert_eq!(user, User { name: "Alice".to_string() });
/// ```
pub fn from_data<T: serde::de::DeserializeOwned>(data: &Value) -> Result<T> {
    serde_path_to_error::deserialize(data).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    #[test]
    fn to_json_serialize() {
        let_assert!(Ok(bytes) = to_json(&json!({ "firstName": "Joe" })));
        check!(bytes.as_ref() == br#"{"firstName":"Joe"}"#);
    }

    #[test]
    fn decode_data_json() {
        check!(decode_data(br#"{"id":1}"#) == json!({ "id": 1 }));
        check!(decode_data(b"[1,2]") == json!([1, 2]));
    }

    #[test]
    fn decode_data_text_fallback() {
        check!(decode_data(b"get list") == json!("get list"));
    }

    #[test]
    fn decode_data_empty() {
        check!(decode_data(b"") == Value::Null);
    }

    #[test]
    fn from_data_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<User> = from_data(&json!({ "address": {} }));

        let_assert!(Err(err) = result);
        let msg = err.to_string();
        check!(msg.contains("address"), "Expected path 'address' in error: {msg}");
        check!(msg.contains("city"), "Expected field 'city' mentioned in error: {msg}");
    }
}
