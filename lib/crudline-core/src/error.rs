//! Error types for crudline.

use derive_more::{Display, Error, From};
use serde_json::Value;

use crate::Operation;

/// Main error type for crudline operations.
///
/// The composition machinery never rewrites an error: whatever a transport or
/// middleware layer produces is what the caller observes.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The operation has no implementation in the terminal transport.
    #[display("{_0} not implemented")]
    #[from(skip)]
    NotImplemented(#[error(not(source))] Operation),

    /// Invalid connector configuration, raised at construction time.
    #[display("{_0}")]
    #[from(skip)]
    Configuration(#[error(not(source))] String),

    /// HTTP-level errors (non-2xx status codes).
    #[display("HTTP error {status}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Decoded response payload.
        #[error(not(source))]
        data: Value,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request content.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Failure raised by a middleware layer.
    #[display("middleware error: {_0}")]
    #[from(skip)]
    Middleware(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Message of the error raised when wrapping a frontend connector twice.
    pub const ONLY_ONE_FRONTEND: &'static str = "Only one frontend connector may be constructed";

    /// Create an HTTP error from status code and payload.
    #[must_use]
    pub fn http(status: u16, data: impl Into<Value>) -> Self {
        Self::Http {
            status,
            data: data.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a middleware error.
    #[must_use]
    pub fn middleware(message: impl Into<String>) -> Self {
        Self::Middleware(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the operation if this is a "not implemented" error.
    #[must_use]
    pub const fn not_implemented(&self) -> Option<Operation> {
        match self {
            Self::NotImplemented(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not implemented" error.
    #[must_use]
    pub const fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented(_))
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response payload if this is an HTTP error.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Http { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}
