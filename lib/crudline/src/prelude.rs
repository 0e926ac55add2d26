//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use crudline::prelude::*;
//! ```

pub use crate::{
    Connector, CrudToHttp, Error, HttpTransport, LoggingLayer, Method, Middleware, Operation,
    PartialConnector, PathParams, Request, Response, Result, TowerLayer, Transport,
    TransportConfig, TransportInput, Value, VerbMapping, json,
};
