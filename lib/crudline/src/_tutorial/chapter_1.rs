//! # Chapter 1: Middleware
//!
//! Observe, transform, or short-circuit operations.
//!
//! ## Writing a Middleware
//!
//! A middleware is any `Fn(Connector) -> PartialConnector`. The argument is
//! the connector being wrapped; the result holds the operations this layer
//! handles.
//!
//! ```ignore
//! let shout = |next: Connector| {
//!     PartialConnector::new().read(move |request| {
//!         let next = next.clone();
//!         async move {
//!             let response = next.read(request).await?;
//!             Ok(response.map_data(|data| json!(data.to_string().to_uppercase())))
//!         }
//!     })
//! };
//!
//! let connector = Connector::new(transport).with(shout);
//! ```
//!
//! Operations left unset (`create`, `update`, `delete` above) fall through
//! to the wrapped connector unchanged.
//!
//! ## Middleware Order
//!
//! The layer added last is the outermost:
//!
//! ```text
//! connector.with(mw1).with(mw2)
//!
//! Request  → mw2 → mw1 → transport
//! Response ← mw2 ← mw1 ← transport     = mw2(mw1(response))
//! ```
//!
//! ## Stock Middleware
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CrudToHttp`](crate::CrudToHttp) | Sets the HTTP verb per operation |
//! | [`LoggingLayer`](crate::LoggingLayer) | Logs operations with `tracing` |
//! | [`PathParams`](crate::PathParams) | Fills `{..}` placeholders from params |
//! | [`TowerLayer`](crate::TowerLayer) | Applies any tower layer |
//!
//! ## Tower Layers
//!
//! A connector is a `tower::Service<Call>`, so tower layers plug in directly:
//!
//! ```ignore
//! use tower::timeout::TimeoutLayer;
//!
//! let connector = connector.with(TowerLayer::new(TimeoutLayer::new(Duration::from_secs(5))));
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Parameters & HTTP][super::chapter_2]
