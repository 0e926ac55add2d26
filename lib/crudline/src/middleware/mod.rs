//! Middleware for crudline connectors.
//!
//! A middleware receives the connector it wraps (`next`) and returns a
//! [`PartialConnector`]: any subset of the four operations. Operations it
//! leaves unset fall through to `next` unchanged. Layers are applied with
//! [`Connector::with`]; the last layer added is the first to see a request
//! and the last to see its response.
//!
//! # Available Middleware
//!
//! - [`CrudToHttp`] - Maps each operation to an HTTP verb
//! - [`LoggingLayer`] - Logs operations and outcomes using `tracing`
//! - [`PathParams`] - Substitutes `{..}` placeholders with request params
//! - [`TowerLayer`] - Applies any `tower::Layer` (timeouts, concurrency limits, ...)
//!
//! # Example: Writing a Middleware
//!
//! ```ignore
//! use crudline::{Connector, PartialConnector, Response};
//!
//! // Wraps every `create` response; other operations pass through.
//! let tagged = |next: Connector| {
//!     PartialConnector::new().create(move |request| {
//!         let next = next.clone();
//!         async move {
//!             let response = next.create(request).await?;
//!             Ok(response.map_data(|data| format!("tagged({data})").into()))
//!         }
//!     })
//! };
//!
//! let connector = Connector::new(transport).with(tagged);
//! ```

mod crud_to_http;
mod logging;
mod path_params;
mod tower_layer;

use std::future::Future;
use std::sync::Arc;

pub use crud_to_http::{CrudToHttp, VerbMapping, VerbMappingBuilder, crud_to_http};
pub use logging::{LogLevel, LoggingLayer};
pub use path_params::PathParams;
pub use tower_layer::TowerLayer;

use crate::connector::{ConnectorFuture, Handler, Transport, dispatch};
use crate::{Connector, Operation, Request, Response, Result};

/// A middleware factory: builds the layer wrapping `next`.
///
/// Implemented for every `Fn(Connector) -> PartialConnector`.
pub trait Middleware {
    /// Build the handlers of this layer on top of `next`.
    fn wrap(&self, next: Connector) -> PartialConnector;
}

impl<F> Middleware for F
where
    F: Fn(Connector) -> PartialConnector,
{
    fn wrap(&self, next: Connector) -> PartialConnector {
        self(next)
    }
}

/// A record of up to four operation handlers.
///
/// Returned by middleware, and accepted as a raw transport by
/// [`Connector::from_partial`]. An unset handler means "not provided here":
/// the operation falls through to the wrapped connector, or rejects with
/// "not implemented" at the base of the chain.
#[derive(Clone, Default)]
pub struct PartialConnector {
    create: Option<Handler>,
    read: Option<Handler>,
    update: Option<Handler>,
    delete: Option<Handler>,
}

impl std::fmt::Debug for PartialConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartialConnector")
            .field("create", &self.create.is_some())
            .field("read", &self.read.is_some())
            .field("update", &self.update.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

impl PartialConnector {
    /// An empty record: every operation falls through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All four handlers backed by a [`Transport`].
    #[must_use]
    pub fn from_transport<T: Transport>(transport: T) -> Self {
        let transport = Arc::new(transport);
        let mut partial = Self::new();
        for operation in Operation::ALL {
            let transport = Arc::clone(&transport);
            let handler: Handler =
                Arc::new(move |request: Request| dispatch(transport.as_ref(), operation, request));
            partial = partial.with_handler(operation, handler);
        }
        partial
    }

    /// Set the handler of `operation` from an async function.
    #[must_use]
    pub fn on<F, Fut>(self, operation: Operation, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |request: Request| -> ConnectorFuture {
            Box::pin(f(request))
        });
        self.with_handler(operation, handler)
    }

    /// Set the handler of `operation`.
    #[must_use]
    pub fn with_handler(mut self, operation: Operation, handler: Handler) -> Self {
        *self.slot_mut(operation) = Some(handler);
        self
    }

    /// Set the `create` handler.
    #[must_use]
    pub fn create<F, Fut>(self, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.on(Operation::Create, f)
    }

    /// Set the `read` handler.
    #[must_use]
    pub fn read<F, Fut>(self, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.on(Operation::Read, f)
    }

    /// Set the `update` handler.
    #[must_use]
    pub fn update<F, Fut>(self, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.on(Operation::Update, f)
    }

    /// Set the `delete` handler.
    #[must_use]
    pub fn delete<F, Fut>(self, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.on(Operation::Delete, f)
    }

    /// Handler of `operation`, if set.
    #[must_use]
    pub fn handler(&self, operation: Operation) -> Option<&Handler> {
        match operation {
            Operation::Create => self.create.as_ref(),
            Operation::Read => self.read.as_ref(),
            Operation::Update => self.update.as_ref(),
            Operation::Delete => self.delete.as_ref(),
        }
    }

    /// Returns `true` if `operation` has a handler.
    #[must_use]
    pub fn implements(&self, operation: Operation) -> bool {
        self.handler(operation).is_some()
    }

    /// Returns `true` if no operation has a handler.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !Operation::ALL.into_iter().any(|op| self.implements(op))
    }

    fn slot_mut(&mut self, operation: Operation) -> &mut Option<Handler> {
        match operation {
            Operation::Create => &mut self.create,
            Operation::Read => &mut self.read,
            Operation::Update => &mut self.update,
            Operation::Delete => &mut self.delete,
        }
    }
}
