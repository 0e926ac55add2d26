//! HTTP verbs.
//!
//! A [`Method`] is what a CRUD [`Operation`](crate::Operation) resolves to once
//! a verb-mapping middleware has run. The transport sends `GET` when no verb
//! was set.

use derive_more::Display;

/// Verb sent by the HTTP transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// Default verb for `read`, and the fallback when none was mapped.
    #[display("GET")]
    Get,
    /// Default verb for `create`.
    #[display("POST")]
    Post,
    /// Common override for `update` on APIs replacing whole resources.
    #[display("PUT")]
    Put,
    /// Default verb for `delete`.
    #[display("DELETE")]
    Delete,
    /// Default verb for `update`.
    #[display("PATCH")]
    Patch,
    /// `HEAD`, for probing a resource without its data.
    #[display("HEAD")]
    Head,
    /// `OPTIONS`.
    #[display("OPTIONS")]
    Options,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
        }
    }
}
