//! # Tutorial: Composing CRUD Connectors with crudline
//!
//! Learn to build connectors and middleware step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first connector
//! 2. [Middleware][chapter_1] - Layers, ordering, partial middleware
//! 3. [Parameters & HTTP][chapter_2] - Params, path templates, the HTTP transport
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
