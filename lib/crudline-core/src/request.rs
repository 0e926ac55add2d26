//! CRUD request record.
//!
//! A [`Request`] is passed through every middleware layer down to the
//! transport. Layers may rewrite any field before forwarding it.
//!
//! # Example
//!
//! ```
//! use crudline_core::{Method, Request, json};
//!
//! let request = Request::builder("/api/object/add/")
//!     .method(Method::Post)
//!     .header("Accept", "application/json")
//!     .data(json!({ "firstName": "Joe" }))
//!     .build();
//!
//! assert_eq!(request.url(), "/api/object/add/");
//! assert_eq!(request.http_method(), Some(Method::Post));
//! ```

use std::collections::HashMap;

use http::Extensions;
use serde_json::Value;

use crate::Method;

/// A CRUD request: locator, optional verb, optional payload, headers,
/// positional params, and typed extensions.
#[derive(Debug, Clone, Default)]
pub struct Request {
    url: String,
    http_method: Option<Method>,
    data: Option<Value>,
    headers: HashMap<String, String>,
    params: Vec<Value>,
    extensions: Extensions,
}

impl Request {
    /// Creates a request targeting `url` with no other field set.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// Target locator.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the target locator.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Resolved HTTP verb, if a middleware has set one.
    #[must_use]
    pub const fn http_method(&self) -> Option<Method> {
        self.http_method
    }

    /// Sets the resolved HTTP verb.
    pub fn set_http_method(&mut self, method: Method) {
        self.http_method = Some(method);
    }

    /// Request payload.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Replaces the request payload.
    pub fn set_data(&mut self, data: impl Into<Value>) {
        self.data = Some(data.into());
    }

    /// Removes and returns the request payload.
    pub fn take_data(&mut self) -> Option<Value> {
        self.data.take()
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Positional params accumulated by parametrized connectors.
    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Mutable access to params.
    #[must_use]
    pub fn params_mut(&mut self) -> &mut Vec<Value> {
        &mut self.params
    }

    /// Replaces the positional params.
    pub fn set_params(&mut self, params: Vec<Value>) {
        self.params = params;
    }

    /// Typed extensions attached by middleware.
    #[must_use]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Mutable access to extensions.
    #[must_use]
    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            request: Request::new(url),
        }
    }

    /// Sets the HTTP verb.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.request.http_method = Some(method);
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.request.headers.extend(headers);
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.request.data = Some(data.into());
        self
    }

    /// Sets the payload from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let data = serde_json::to_value(value)?;
        Ok(self.data(data))
    }

    /// Appends positional params.
    #[must_use]
    pub fn params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.request.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Attaches a typed extension.
    #[must_use]
    pub fn extension<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.request.extensions.insert(value);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        self.request
    }
}

impl From<&str> for Request {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for Request {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}
