//! Integration tests for connector composition.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use assert2::{check, let_assert};
use crudline::{
    Connector, ConnectorFuture, Error, Operation, PartialConnector, Request, Response, Transport,
    TransportInput, json,
};

/// Per-operation call counters.
#[derive(Clone, Default)]
struct Counter {
    counts: Arc<[AtomicUsize; 4]>,
}

impl Counter {
    fn slot(&self, operation: Operation) -> &AtomicUsize {
        let [create, read, update, delete] = &*self.counts;
        match operation {
            Operation::Create => create,
            Operation::Read => read,
            Operation::Update => update,
            Operation::Delete => delete,
        }
    }

    fn hit(&self, operation: Operation) {
        self.slot(operation).fetch_add(1, Ordering::SeqCst);
    }

    fn get(&self, operation: Operation) -> usize {
        self.slot(operation).load(Ordering::SeqCst)
    }

    /// Counts in `create`, `read`, `update`, `delete` order.
    fn all(&self) -> [usize; 4] {
        Operation::ALL.map(|operation| self.get(operation))
    }
}

/// Answers `<operation> OK`, counts calls, and remembers the last request.
#[derive(Clone, Default)]
struct Recording {
    calls: Counter,
    last: Arc<std::sync::Mutex<Option<Request>>>,
}

impl Recording {
    fn answer(&self, operation: Operation, request: Request) -> ConnectorFuture {
        self.calls.hit(operation);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(request);
        }
        Box::pin(async move { Ok(Response::new(format!("{operation} OK"))) })
    }

    fn last(&self) -> Option<Request> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl Transport for Recording {
    fn create(&self, request: Request) -> ConnectorFuture {
        self.answer(Operation::Create, request)
    }

    fn read(&self, request: Request) -> ConnectorFuture {
        self.answer(Operation::Read, request)
    }

    fn update(&self, request: Request) -> ConnectorFuture {
        self.answer(Operation::Update, request)
    }

    fn delete(&self, request: Request) -> ConnectorFuture {
        self.answer(Operation::Delete, request)
    }
}

/// Wraps the `create` response data as `<name>(<data>)`.
fn wrap_create(name: &'static str) -> impl Fn(Connector) -> PartialConnector {
    move |next: Connector| {
        PartialConnector::new().create(move |request| {
            let next = next.clone();
            async move {
                let response = next.create(request).await?;
                Ok(response.map_data(|data| {
                    json!(format!("{name}({})", data.as_str().unwrap_or_default()))
                }))
            }
        })
    }
}

/// Counts every operation flowing through it.
fn counting(counter: Counter) -> impl Fn(Connector) -> PartialConnector {
    move |next: Connector| {
        Operation::ALL
            .into_iter()
            .fold(PartialConnector::new(), |partial, operation| {
                let next = next.clone();
                let counter = counter.clone();
                partial.on(operation, move |request| {
                    counter.hit(operation);
                    next.execute(operation, request)
                })
            })
    }
}

/// Counts `create` calls only; other operations fall through.
fn counting_creates(counter: Counter) -> impl Fn(Connector) -> PartialConnector {
    move |next: Connector| {
        let counter = counter.clone();
        PartialConnector::new().create(move |request| {
            counter.hit(Operation::Create);
            next.create(request)
        })
    }
}

async fn run_sequence(connector: &Connector) {
    for operation in [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
        Operation::Create,
    ] {
        let_assert!(Ok(_) = connector.execute(operation, "/api/").await);
    }
}

#[tokio::test]
async fn test_frontend_exposes_every_operation() {
    let_assert!(Ok(connector) = Connector::frontend(TransportInput::transport(Recording::default())));

    for operation in Operation::ALL {
        let_assert!(Ok(response) = connector.execute(operation, "/api/list/").await);
        check!(response.text() == Some(format!("{operation} OK").as_str()));
    }
}

#[tokio::test]
async fn test_missing_operations_are_not_implemented() {
    let_assert!(Ok(connector) = Connector::frontend(TransportInput::none()));

    for operation in Operation::ALL {
        let_assert!(Err(err) = connector.execute(operation, "/api/list/").await);
        check!(err.is_not_implemented());
        check!(err.to_string() == format!("{operation} not implemented"));
    }
}

#[tokio::test]
async fn test_partial_transport_keeps_given_operations() {
    let partial = PartialConnector::new().read(|_request| async { Ok(Response::new("read OK")) });
    let_assert!(Ok(connector) = Connector::frontend(partial));

    let_assert!(Ok(response) = connector.read("/api/list/").await);
    check!(response.text() == Some("read OK"));

    let_assert!(Err(Error::NotImplemented(Operation::Create)) = connector.create("/api/").await);
    let_assert!(Err(Error::NotImplemented(Operation::Delete)) = connector.delete("/api/").await);
}

#[tokio::test]
async fn test_request_reaches_the_transport() {
    let transport = Recording::default();
    let connector = Connector::new(transport.clone());

    let request = Request::builder("/api/object/")
        .data(json!({ "firstName": "Joe" }))
        .header("X-Test", "yes")
        .build();
    let_assert!(Ok(_) = connector.update(request).await);

    let_assert!(Some(seen) = transport.last());
    check!(seen.url() == "/api/object/");
    check!(seen.data() == Some(&json!({ "firstName": "Joe" })));
    check!(seen.header("X-Test") == Some("yes"));
}

#[tokio::test]
async fn test_frontend_twice_is_rejected() {
    let_assert!(Ok(connector) = Connector::frontend(TransportInput::transport(Recording::default())));

    let_assert!(Err(err) = Connector::frontend(connector));
    check!(err.is_configuration());
    check!(err.to_string().contains("Only one frontend connector"));
}

#[tokio::test]
async fn test_middleware_wraps_the_response() {
    let connector = Connector::new(Recording::default()).with(wrap_create("mw1"));

    let_assert!(Ok(response) = connector.create("/api/").await);
    check!(response.text() == Some("mw1(create OK)"));
}

#[tokio::test]
async fn test_middleware_order_last_added_is_outermost() {
    let connector = Connector::new(Recording::default())
        .with(wrap_create("mw1"))
        .with(wrap_create("mw2"));

    let_assert!(Ok(response) = connector.create("/api/").await);
    check!(response.text() == Some("mw2(mw1(create OK))"));

    // Operations neither layer implements fall through.
    let_assert!(Ok(response) = connector.read("/api/").await);
    check!(response.text() == Some("read OK"));
}

#[tokio::test]
async fn test_composition_does_not_mutate_the_source() {
    let base = Connector::new(Recording::default());
    let _wrapped = base.with(wrap_create("mw1"));

    let_assert!(Ok(response) = base.create("/api/").await);
    check!(response.text() == Some("create OK"));
}

#[tokio::test]
async fn test_empty_middleware_is_a_no_op() {
    let transport = Recording::default();
    let connector =
        Connector::new(transport.clone()).with(|_next: Connector| PartialConnector::new());

    for operation in Operation::ALL {
        let_assert!(Ok(response) = connector.execute(operation, "/api/").await);
        check!(response.text() == Some(format!("{operation} OK").as_str()));
    }
    check!(transport.calls.all() == [1, 1, 1, 1]);
}

#[tokio::test]
async fn test_partial_middleware_falls_through_for_other_operations() {
    let transport = Recording::default();
    let creates = Counter::default();
    let connector = Connector::new(transport.clone()).with(counting_creates(creates.clone()));

    run_sequence(&connector).await;

    check!(creates.all() == [2, 0, 0, 0]);
    check!(transport.calls.all() == [2, 1, 1, 1]);
}

#[tokio::test]
async fn test_empty_layer_does_not_change_call_counts() {
    let transport = Recording::default();
    let creates = Counter::default();
    let connector = Connector::new(transport.clone())
        .with(|_next: Connector| PartialConnector::new())
        .with(counting_creates(creates.clone()))
        .with(|_next: Connector| PartialConnector::new());

    run_sequence(&connector).await;

    check!(creates.get(Operation::Create) == 2);
    check!(transport.calls.all() == [2, 1, 1, 1]);
}

#[tokio::test]
async fn test_counting_middleware_sees_every_call() {
    let counter = Counter::default();
    let connector = Connector::new(Recording::default()).with(counting(counter.clone()));

    let_assert!(Ok(_) = connector.create("/api/").await);
    let_assert!(Ok(_) = connector.create("/api/").await);
    let_assert!(Ok(_) = connector.read("/api/").await);
    let_assert!(Ok(_) = connector.update("/api/").await);
    let_assert!(Ok(_) = connector.delete("/api/").await);

    check!(counter.all() == [2, 1, 1, 1]);
}

#[tokio::test]
async fn test_params_are_injected() {
    let transport = Recording::default();
    let connector = Connector::new(transport.clone()).with_params([1, 2, 3]);

    let_assert!(Ok(_) = connector.read("/api/").await);
    let_assert!(Some(seen) = transport.last());
    check!(seen.params() == [json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn test_params_accumulate() {
    let transport = Recording::default();
    let base = Connector::new(transport.clone());
    let first = base.param(1);
    let second = first.with_params([2, 3]);

    check!(base.params().is_empty());
    check!(first.params() == [json!(1)]);

    let_assert!(Ok(_) = second.delete("/api/").await);
    let_assert!(Some(seen) = transport.last());
    check!(seen.params() == [json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn test_params_reach_middleware_added_after_parametrization() {
    let transport = Recording::default();
    let seen_by_middleware = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&seen_by_middleware);

    let connector = Connector::new(transport.clone())
        .with_params(["a", "b"])
        .with(move |next: Connector| {
            let seen = Arc::clone(&seen);
            PartialConnector::new().read(move |request| {
                seen.store(request.params().len(), Ordering::SeqCst);
                next.read(request)
            })
        });

    let_assert!(Ok(_) = connector.read("/api/").await);
    check!(seen_by_middleware.load(Ordering::SeqCst) == 2);
    let_assert!(Some(request) = transport.last());
    check!(request.params() == [json!("a"), json!("b")]);
}

#[tokio::test]
async fn test_connector_is_a_tower_service() {
    use crudline::Call;
    use tower::ServiceExt;

    let connector = Connector::new(Recording::default());
    let_assert!(Ok(response) = connector.oneshot(Call::new(Operation::Update, "/api/")).await);
    check!(response.text() == Some("update OK"));
}

#[tokio::test]
async fn test_concurrent_calls_share_the_chain() {
    let counter = Counter::default();
    let connector = Connector::new(Recording::default()).with(counting(counter.clone()));

    let calls = (0..10).map(|i| connector.param(i).read("/api/"));
    let results = futures_util::future::join_all(calls).await;

    check!(results.iter().all(Result::is_ok));
    check!(counter.get(Operation::Read) == 10);
}
