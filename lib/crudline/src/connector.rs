//! Connector chain builder.
//!
//! A [`Connector`] exposes the four CRUD operations. It is built once from a
//! terminal transport, then wrapped by middleware with [`Connector::with`]
//! and parametrized with [`Connector::with_params`]. Every composition step
//! returns a new connector; existing connectors are never mutated.
//!
//! ```text
//! connector.create(req)
//!   └─ mw2.create(req)            (added last, runs first)
//!        └─ mw1.create(req)
//!             └─ transport.create(req)
//!             ┌─ response
//!        ┌─ mw1(response)
//!   ┌─ mw2(mw1(response))
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use serde_json::Value;
use tower_service::Service;

use crate::middleware::{Middleware, PartialConnector};
use crate::{Error, Operation, Request, Response, Result};

/// Future returned by every connector operation.
pub type ConnectorFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send + 'static>>;

/// A type-erased operation handler.
pub type Handler = Arc<dyn Fn(Request) -> ConnectorFuture + Send + Sync + 'static>;

/// Returns a future rejecting with "`<operation>` not implemented".
#[must_use]
pub fn not_implemented(operation: Operation) -> ConnectorFuture {
    Box::pin(async move { Err(Error::NotImplemented(operation)) })
}

fn not_implemented_handler(operation: Operation) -> Handler {
    Arc::new(move |_request: Request| not_implemented(operation))
}

// ============================================================================
// Transport
// ============================================================================

/// A terminal transport.
///
/// Every method has a provided implementation rejecting with
/// [`Error::NotImplemented`], so an implementor only overrides the operations
/// its backend supports.
///
/// # Example
///
/// ```ignore
/// use crudline::{ConnectorFuture, Request, Response, Transport};
///
/// struct ReadOnly;
///
/// impl Transport for ReadOnly {
///     fn read(&self, _request: Request) -> ConnectorFuture {
///         Box::pin(async { Ok(Response::new("read OK")) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync + 'static {
    /// Create a resource.
    fn create(&self, request: Request) -> ConnectorFuture {
        let _ = request;
        not_implemented(Operation::Create)
    }

    /// Read a resource.
    fn read(&self, request: Request) -> ConnectorFuture {
        let _ = request;
        not_implemented(Operation::Read)
    }

    /// Update a resource.
    fn update(&self, request: Request) -> ConnectorFuture {
        let _ = request;
        not_implemented(Operation::Update)
    }

    /// Delete a resource.
    fn delete(&self, request: Request) -> ConnectorFuture {
        let _ = request;
        not_implemented(Operation::Delete)
    }
}

pub(crate) fn dispatch<T>(transport: &T, operation: Operation, request: Request) -> ConnectorFuture
where
    T: Transport + ?Sized,
{
    match operation {
        Operation::Create => transport.create(request),
        Operation::Read => transport.read(request),
        Operation::Update => transport.update(request),
        Operation::Delete => transport.delete(request),
    }
}

/// Input accepted by [`Connector::frontend`].
///
/// Only [`TransportInput::Raw`] can become a frontend connector: an existing
/// connector is already a frontend root and wrapping it again is rejected.
pub enum TransportInput {
    /// A raw transport, given as a partial set of handlers.
    Raw(PartialConnector),
    /// An already-constructed connector.
    AlreadyWrapped(Connector),
}

impl TransportInput {
    /// A raw input with no handler at all.
    #[must_use]
    pub fn none() -> Self {
        Self::Raw(PartialConnector::new())
    }

    /// A raw input backed by a [`Transport`] implementation.
    #[must_use]
    pub fn transport<T: Transport>(transport: T) -> Self {
        Self::Raw(PartialConnector::from_transport(transport))
    }
}

impl Default for TransportInput {
    fn default() -> Self {
        Self::none()
    }
}

impl From<PartialConnector> for TransportInput {
    fn from(partial: PartialConnector) -> Self {
        Self::Raw(partial)
    }
}

impl From<Connector> for TransportInput {
    fn from(connector: Connector) -> Self {
        Self::AlreadyWrapped(connector)
    }
}

impl std::fmt::Debug for TransportInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw(partial) => f.debug_tuple("Raw").field(partial).finish(),
            Self::AlreadyWrapped(connector) => {
                f.debug_tuple("AlreadyWrapped").field(connector).finish()
            }
        }
    }
}

// ============================================================================
// Connector
// ============================================================================

struct Slots {
    create: Handler,
    read: Handler,
    update: Handler,
    delete: Handler,
}

impl Slots {
    fn from_fn(mut slot: impl FnMut(Operation) -> Handler) -> Self {
        Self {
            create: slot(Operation::Create),
            read: slot(Operation::Read),
            update: slot(Operation::Update),
            delete: slot(Operation::Delete),
        }
    }

    fn get(&self, operation: Operation) -> &Handler {
        match operation {
            Operation::Create => &self.create,
            Operation::Read => &self.read,
            Operation::Update => &self.update,
            Operation::Delete => &self.delete,
        }
    }
}

/// A CRUD connector: a terminal transport wrapped by zero or more middleware.
///
/// All four operations are always callable. Cloning is cheap: handlers are
/// shared, not copied.
///
/// # Example
///
/// ```ignore
/// use crudline::{Connector, CrudToHttp, LoggingLayer};
///
/// let api = Connector::http(config)
///     .with(CrudToHttp::new())
///     .with(LoggingLayer::new());
///
/// let user = api.with_params([42]).read("/users/{id}").await?;
/// ```
#[derive(Clone)]
pub struct Connector {
    slots: Arc<Slots>,
    params: Arc<[Value]>,
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::empty()
    }
}

impl Connector {
    fn from_slots(slots: Slots) -> Self {
        Self {
            slots: Arc::new(slots),
            params: Arc::from(Vec::new()),
        }
    }

    /// A connector where every operation rejects with "not implemented".
    #[must_use]
    pub fn empty() -> Self {
        Self::from_slots(Slots::from_fn(not_implemented_handler))
    }

    /// Build a connector on top of a [`Transport`].
    #[must_use]
    pub fn new<T: Transport>(transport: T) -> Self {
        Self::from_partial(PartialConnector::from_transport(transport))
    }

    /// Build a connector from a set of handlers.
    ///
    /// Missing handlers reject with "`<operation>` not implemented".
    #[must_use]
    pub fn from_partial(partial: PartialConnector) -> Self {
        Self::from_slots(Slots::from_fn(|operation| {
            partial
                .handler(operation)
                .map_or_else(|| not_implemented_handler(operation), Arc::clone)
        }))
    }

    /// Build the frontend root connector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `input` is already a connector.
    pub fn frontend(input: impl Into<TransportInput>) -> Result<Self> {
        match input.into() {
            TransportInput::Raw(partial) => Ok(Self::from_partial(partial)),
            TransportInput::AlreadyWrapped(_) => {
                Err(Error::configuration(Error::ONLY_ONE_FRONTEND))
            }
        }
    }

    /// Wrap this connector with a middleware, returning a new connector.
    ///
    /// Operations the middleware implements replace the current ones; the
    /// others fall through unchanged. The middleware added last is the
    /// outermost layer.
    ///
    /// Accumulated params are kept and still injected before the outermost
    /// layer runs; the middleware itself receives an un-parametrized `next`.
    #[must_use]
    pub fn with<M: Middleware>(&self, middleware: M) -> Self {
        let partial = middleware.wrap(self.without_params());
        let slots = Slots::from_fn(|operation| {
            partial
                .handler(operation)
                .map_or_else(|| Arc::clone(self.slots.get(operation)), Arc::clone)
        });

        Self {
            slots: Arc::new(slots),
            params: Arc::clone(&self.params),
        }
    }

    /// Returns a connector injecting `params` after the ones already
    /// accumulated.
    ///
    /// `c.with_params([1]).with_params([2, 3])` behaves as
    /// `c.with_params([1, 2, 3])`; `c` itself is left untouched.
    #[must_use]
    pub fn with_params<I>(&self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let params: Arc<[Value]> = self
            .params
            .iter()
            .cloned()
            .chain(params.into_iter().map(Into::into))
            .collect();

        Self {
            slots: Arc::clone(&self.slots),
            params,
        }
    }

    /// Single-value form of [`Connector::with_params`].
    #[must_use]
    pub fn param(&self, value: impl Into<Value>) -> Self {
        self.with_params([value])
    }

    /// Params accumulated so far.
    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// The same chain without accumulated params.
    #[must_use]
    pub fn without_params(&self) -> Self {
        Self::from_parts(Arc::clone(&self.slots), Arc::from(Vec::new()))
    }

    fn from_parts(slots: Arc<Slots>, params: Arc<[Value]>) -> Self {
        Self { slots, params }
    }

    /// Run `operation` on `request`.
    ///
    /// When params were accumulated they replace the request's `params`
    /// field; every other field is left as is.
    pub fn execute(&self, operation: Operation, request: impl Into<Request>) -> ConnectorFuture {
        let mut request = request.into();
        if !self.params.is_empty() {
            request.set_params(self.params.to_vec());
        }

        (self.slots.get(operation))(request)
    }

    /// Create a resource.
    pub fn create(&self, request: impl Into<Request>) -> ConnectorFuture {
        self.execute(Operation::Create, request)
    }

    /// Read a resource.
    pub fn read(&self, request: impl Into<Request>) -> ConnectorFuture {
        self.execute(Operation::Read, request)
    }

    /// Update a resource.
    pub fn update(&self, request: impl Into<Request>) -> ConnectorFuture {
        self.execute(Operation::Update, request)
    }

    /// Delete a resource.
    pub fn delete(&self, request: impl Into<Request>) -> ConnectorFuture {
        self.execute(Operation::Delete, request)
    }
}

// ============================================================================
// Tower Service Implementation
// ============================================================================

/// An operation together with its request, as seen by tower layers.
#[derive(Debug, Clone)]
pub struct Call {
    /// Operation to run.
    pub operation: Operation,
    /// Request to run it on.
    pub request: Request,
}

impl Call {
    /// Create a new call.
    #[must_use]
    pub fn new(operation: Operation, request: impl Into<Request>) -> Self {
        Self {
            operation,
            request: request.into(),
        }
    }
}

impl Service<Call> for Connector {
    type Response = Response;
    type Error = Error;
    type Future = ConnectorFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, call: Call) -> Self::Future {
        self.execute(call.operation, call.request)
    }
}
