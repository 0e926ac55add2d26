//! Tower layer adapter.
//!
//! Lets any `tower::Layer` act as a crudline middleware. The wrapped
//! connector is seen by the layer as a `Service<Call>`; all four operations
//! are routed through the layered service.

use tower::timeout::error::Elapsed;
use tower::{BoxError, Layer, ServiceExt};
use tower_service::Service;

use crate::middleware::{Middleware, PartialConnector};
use crate::{Call, Connector, Error, Operation, Response};

/// Middleware applying a tower layer to the wrapped connector.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use crudline::{Connector, TowerLayer};
/// use tower::timeout::TimeoutLayer;
///
/// let connector = Connector::new(transport)
///     .with(TowerLayer::new(TimeoutLayer::new(Duration::from_secs(5))));
/// ```
#[derive(Debug, Clone)]
pub struct TowerLayer<L> {
    layer: L,
}

impl<L> TowerLayer<L> {
    /// Wrap a tower layer.
    pub const fn new(layer: L) -> Self {
        Self { layer }
    }

    /// The wrapped layer.
    pub const fn inner(&self) -> &L {
        &self.layer
    }
}

impl<L, S> Middleware for TowerLayer<L>
where
    L: Layer<Connector, Service = S>,
    S: Service<Call, Response = Response> + Clone + Send + Sync + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    fn wrap(&self, next: Connector) -> PartialConnector {
        let service = self.layer.layer(next);
        Operation::ALL
            .into_iter()
            .fold(PartialConnector::new(), |partial, operation| {
                let service = service.clone();
                partial.on(operation, move |request| {
                    let service = service.clone();
                    async move {
                        service
                            .oneshot(Call::new(operation, request))
                            .await
                            .map_err(into_error)
                    }
                })
            })
    }
}

/// Convert a layer error back into an [`Error`].
///
/// Errors that already are [`Error`] pass through unchanged.
fn into_error(err: impl Into<BoxError>) -> Error {
    match err.into().downcast::<Error>() {
        Ok(err) => *err,
        Err(err) if err.is::<Elapsed>() => Error::Timeout,
        Err(err) => Error::middleware(err.to_string()),
    }
}
