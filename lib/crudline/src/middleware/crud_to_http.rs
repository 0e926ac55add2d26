//! CRUD to HTTP verb mapping middleware.
//!
//! Sets the request's HTTP method from the operation being run, so that the
//! terminal transport only has to read [`Request::http_method`].

use crate::middleware::{Middleware, PartialConnector};
use crate::{Connector, Method, Operation};

/// Verb used for each CRUD operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbMapping {
    /// Verb for `create`.
    pub create: Method,
    /// Verb for `read`.
    pub read: Method,
    /// Verb for `update`.
    pub update: Method,
    /// Verb for `delete`.
    pub delete: Method,
}

impl Default for VerbMapping {
    fn default() -> Self {
        Self {
            create: Method::Post,
            read: Method::Get,
            update: Method::Patch,
            delete: Method::Delete,
        }
    }
}

impl VerbMapping {
    /// Create a new mapping builder.
    #[must_use]
    pub fn builder() -> VerbMappingBuilder {
        VerbMappingBuilder::default()
    }

    /// Verb mapped to `operation`.
    #[must_use]
    pub const fn get(&self, operation: Operation) -> Method {
        match operation {
            Operation::Create => self.create,
            Operation::Read => self.read,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// Builder for [`VerbMapping`]. Unset operations keep their default verb.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbMappingBuilder {
    create: Option<Method>,
    read: Option<Method>,
    update: Option<Method>,
    delete: Option<Method>,
}

impl VerbMappingBuilder {
    /// Set the verb for `create`.
    #[must_use]
    pub const fn create(mut self, method: Method) -> Self {
        self.create = Some(method);
        self
    }

    /// Set the verb for `read`.
    #[must_use]
    pub const fn read(mut self, method: Method) -> Self {
        self.read = Some(method);
        self
    }

    /// Set the verb for `update`.
    #[must_use]
    pub const fn update(mut self, method: Method) -> Self {
        self.update = Some(method);
        self
    }

    /// Set the verb for `delete`.
    #[must_use]
    pub const fn delete(mut self, method: Method) -> Self {
        self.delete = Some(method);
        self
    }

    /// Build the mapping.
    #[must_use]
    pub fn build(self) -> VerbMapping {
        let defaults = VerbMapping::default();
        VerbMapping {
            create: self.create.unwrap_or(defaults.create),
            read: self.read.unwrap_or(defaults.read),
            update: self.update.unwrap_or(defaults.update),
            delete: self.delete.unwrap_or(defaults.delete),
        }
    }
}

/// Middleware setting the HTTP verb of every request.
///
/// # Example
///
/// ```ignore
/// use crudline::{Connector, CrudToHttp, Method, VerbMapping};
///
/// let connector = Connector::http(config).with(CrudToHttp::with_mapping(
///     VerbMapping::builder().update(Method::Put).build(),
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CrudToHttp {
    mapping: VerbMapping,
}

impl CrudToHttp {
    /// Middleware using the default mapping
    /// (`POST`, `GET`, `PATCH`, `DELETE`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Middleware using a custom mapping.
    #[must_use]
    pub const fn with_mapping(mapping: VerbMapping) -> Self {
        Self { mapping }
    }

    /// The mapping in use.
    #[must_use]
    pub const fn mapping(&self) -> &VerbMapping {
        &self.mapping
    }
}

impl Middleware for CrudToHttp {
    fn wrap(&self, next: Connector) -> PartialConnector {
        Operation::ALL
            .into_iter()
            .fold(PartialConnector::new(), |partial, operation| {
                let method = self.mapping.get(operation);
                let next = next.clone();
                partial.on(operation, move |mut request| {
                    request.set_http_method(method);
                    next.execute(operation, request)
                })
            })
    }
}

/// Verb-mapping middleware from a mapping.
#[must_use]
pub const fn crud_to_http(mapping: VerbMapping) -> CrudToHttp {
    CrudToHttp::with_mapping(mapping)
}
