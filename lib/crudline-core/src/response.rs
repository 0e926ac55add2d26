//! Response handling.
//!
//! [`Response`] provides access to status, headers, and the decoded JSON
//! payload.
//!
//! # Example
//!
//! ```ignore
//! let user: User = response.json()?;
//! ```

use http::HeaderMap;
use serde_json::Value;

/// Response with status, headers, and JSON data.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    data: Value,
}

impl Response {
    /// Creates a `200` response carrying `data`.
    #[must_use]
    pub fn new(data: impl Into<Value>) -> Self {
        Self::with_status(200, data)
    }

    /// Creates a response with an explicit status.
    #[must_use]
    pub fn with_status(status: u16, data: impl Into<Value>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            data: data.into(),
        }
    }

    /// Creates a response from its parts.
    #[must_use]
    pub fn from_parts(status: u16, headers: HeaderMap, data: Value) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// Status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub const fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// First value of a header, looked up case-insensitively.
    ///
    /// Values that are not visible ASCII are skipped.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Every value of a repeated header such as `set-cookie`, in received
    /// order.
    pub fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.headers
            .get_all(name)
            .into_iter()
            .filter_map(|value| value.to_str().ok())
    }

    /// Response payload.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Response payload as a string slice, when it is a JSON string.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.data.as_str()
    }

    /// Consume into the payload.
    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }

    /// Consume into (status, headers, data).
    #[must_use]
    pub fn into_parts(self) -> (u16, HeaderMap, Value) {
        (self.status, self.headers, self.data)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Transform the payload with a function, keeping status and headers.
    #[must_use]
    pub fn map_data<F>(self, f: F) -> Self
    where
        F: FnOnce(Value) -> Value,
    {
        Self {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }

    /// Deserialize the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> crate::Result<T> {
        crate::from_data(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use http::HeaderValue;
    use serde_json::json;

    use super::*;

    #[test]
    fn response_basic() {
        let response = Response::new("create OK");

        check!(response.status() == 200);
        check!(response.is_success());
        check!(response.text() == Some("create OK"));
        check!(response.headers().is_empty());
    }

    #[test]
    fn response_status_checks() {
        check!(Response::with_status(404, Value::Null).is_client_error());
        check!(Response::with_status(500, Value::Null).is_server_error());
        check!(!Response::with_status(302, Value::Null).is_success());
    }

    #[test]
    fn response_map_data() {
        let mut response = Response::new("read OK");
        response
            .headers_mut()
            .insert("x-source", HeaderValue::from_static("test"));

        let mapped = response.map_data(|data| json!(format!("mw1({})", data.as_str().unwrap_or_default())));

        check!(mapped.text() == Some("mw1(read OK)"));
        check!(mapped.header("X-Source") == Some("test"));
    }

    #[test]
    fn response_header_lookup_ignores_case() {
        let mut response = Response::new(Value::Null);
        response
            .headers_mut()
            .insert("content-type", HeaderValue::from_static("application/json"));

        check!(response.header("Content-Type") == Some("application/json"));
        check!(response.header("content-type") == Some("application/json"));
        check!(response.header("X-Missing").is_none());
    }

    #[test]
    fn response_keeps_repeated_headers() {
        let mut response = Response::new(Value::Null);
        response
            .headers_mut()
            .append("set-cookie", HeaderValue::from_static("a=1"));
        response
            .headers_mut()
            .append("set-cookie", HeaderValue::from_static("b=2"));

        check!(response.header_values("Set-Cookie").collect::<Vec<_>>() == ["a=1", "b=2"]);
        check!(response.header("set-cookie") == Some("a=1"));
    }

    #[test]
    fn response_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            id: u64,
            name: String,
        }

        let response = Response::new(json!({ "id": 1, "name": "test" }));

        let_assert!(Ok(user) = response.json::<User>());
        check!(
            user == User {
                id: 1,
                name: "test".to_string()
            }
        );
    }

    #[test]
    fn response_into_parts() {
        let (status, headers, data) = Response::with_status(201, json!([1])).into_parts();
        check!(status == 201);
        check!(headers.is_empty());
        check!(data == json!([1]));
    }
}
