//! Composable CRUD connectors for Rust.
//!
//! A [`Connector`] exposes `create`, `read`, `update` and `delete`. It is built
//! from a terminal transport and wrapped by middleware, each layer observing,
//! transforming, or short-circuiting requests and responses.
//!
//! # Example
//!
//! ```ignore
//! use crudline::prelude::*;
//!
//! let config = TransportConfig::builder()
//!     .base_url("https://api.example.com/")
//!     .build();
//!
//! let api = Connector::http(config)
//!     .with(CrudToHttp::new())
//!     .with(PathParams::new())
//!     .with(LoggingLayer::new());
//!
//! let user = api.param(42).read("/users/{id}").await?;
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use connector::{
    Call, Connector, ConnectorFuture, Handler, Transport, TransportInput, not_implemented,
};
pub use middleware::{
    CrudToHttp, LogLevel, LoggingLayer, Middleware, PartialConnector, PathParams, TowerLayer,
    VerbMapping, VerbMappingBuilder, crud_to_http,
};
pub use transport::HttpTransport;

// Re-export tower for layer composition
pub use tower;

// Re-export core types
pub use crudline_core::{
    Error, Extensions, JSON_CONTENT_TYPE, Method, Operation, PathTemplate, Request,
    RequestBuilder, Response, Result, Value, decode_data, from_data, json, to_json,
};

// Re-export http types for status codes and headers
pub use crudline_core::{HeaderMap, StatusCode, header};
