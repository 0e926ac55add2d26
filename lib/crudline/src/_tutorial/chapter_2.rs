//! # Chapter 2: Parameters & HTTP
//!
//! Curry identifiers into requests and talk to a real backend.
//!
//! ## Parametrization
//!
//! [`Connector::with_params`](crate::Connector::with_params) returns a new
//! connector that injects accumulated params into every request:
//!
//! ```ignore
//! let users = api.param(42);
//! let posts = users.with_params([7]);   // params = [42, 7]
//!
//! users.read("/users/{id}").await?;            // /users/42
//! posts.read("/users/{id}/posts/{post}").await?; // /users/42/posts/7
//! ```
//!
//! `api` and `users` are unchanged by the calls that derived from them.
//!
//! ## The HTTP Transport
//!
//! ```ignore
//! let config = TransportConfig::builder()
//!     .base_url("https://api.example.com/")
//!     .header("Accept", "application/json")
//!     .build();
//!
//! let api = Connector::http(config)
//!     .with(CrudToHttp::new())
//!     .with(PathParams::new());
//!
//! match api.create(Request::builder("/users").data(json!({ "name": "Joe" })).build()).await {
//!     Ok(response) => println!("created: {}", response.data()),
//!     Err(err) if err.is_client_error() => println!("rejected: {:?}", err.data()),
//!     Err(err) => return Err(err),
//! }
//! ```
//!
//! ## Summary
//!
//! - Params accumulate immutably and are injected before any middleware runs
//! - `CrudToHttp` decides the verb, the transport only sends
//! - Non-2xx responses reject with `Error::Http { status, data }`
