//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use crudline_core::prelude::*;
//! ```

pub use crate::{
    Error, Method, Operation, Request, RequestBuilder, Response, Result, Value, from_data, json,
    to_json,
};
