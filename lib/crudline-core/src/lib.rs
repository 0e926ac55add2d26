//! Core types for crudline CRUD connectors.
//!
//! This crate provides the foundational types used by crudline:
//! - [`Operation`] - The four CRUD operations
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - Pass-through CRUD request record
//! - [`Response`] - Response with status, headers, and JSON data
//! - [`Error`] and [`Result`] - Error handling
//! - [`PathTemplate`] - Original locator template for middleware access

mod body;
mod error;
mod method;
mod operation;
mod path_template;
pub mod prelude;
mod request;
mod response;

pub use body::{JSON_CONTENT_TYPE, decode_data, from_data, to_json};
pub use error::{Error, Result};
pub use method::Method;
pub use operation::Operation;
pub use path_template::PathTemplate;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes, headers, and extensions
pub use http::{Extensions, HeaderMap, StatusCode, header};

// Re-export serde_json for request/response payloads
pub use serde_json::{Value, json};
