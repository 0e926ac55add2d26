//! # Chapter 0: Getting Started
//!
//! Your first crudline connector in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Build a connector from a transport
//! - Call the four CRUD operations
//! - Handle "not implemented" operations
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! crudline = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Connector
//!
//! A transport implements any subset of the four operations:
//!
//! ```ignore
//! use crudline::prelude::*;
//!
//! let connector = Connector::from_partial(
//!     PartialConnector::new()
//!         .read(|_request| async { Ok(Response::new("read OK")) }),
//! );
//!
//! let response = connector.read("/api/list/").await?;
//! assert_eq!(response.text(), Some("read OK"));
//!
//! // Operations the transport does not provide reject.
//! let err = connector.create("/api/list/").await.unwrap_err();
//! assert_eq!(err.to_string(), "create not implemented");
//! ```
//!
//! ## The Frontend Root
//!
//! [`Connector::frontend`](crate::Connector::frontend) is the guarded
//! constructor: it refuses to wrap a connector a second time.
//!
//! ```ignore
//! let root = Connector::frontend(TransportInput::transport(MyTransport))?;
//! assert!(Connector::frontend(root).is_err());
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 1: Middleware][super::chapter_1] - Wrap the connector in layers
