//! Path parameter substitution middleware.
//!
//! Resolves `{..}` placeholders in the request locator with the positional
//! params accumulated by [`Connector::with_params`], left to right:
//!
//! ```text
//! connector.with_params([7, "a b"]).read("/users/{id}/tags/{tag}")
//!   → url    = "/users/7/tags/a%20b"
//!   → params = []
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;

use crate::middleware::{Middleware, PartialConnector};
use crate::{Connector, Error, Operation, PathTemplate, Request, Result};

/// Path segment encoding set: everything except unreserved characters and
/// sub-delimiters is encoded.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Middleware substituting locator placeholders with request params.
///
/// Placeholders consume params in order; params left over stay in the
/// request. The unresolved locator is stored as a [`PathTemplate`] extension.
/// A locator without placeholders is forwarded unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParams;

impl PathParams {
    /// Create a new path parameter middleware.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for PathParams {
    fn wrap(&self, next: Connector) -> PartialConnector {
        Operation::ALL
            .into_iter()
            .fold(PartialConnector::new(), |partial, operation| {
                let next = next.clone();
                partial.on(operation, move |request| {
                    let next = next.clone();
                    async move {
                        let request = resolve(request)?;
                        next.execute(operation, request).await
                    }
                })
            })
    }
}

fn segment(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    utf8_percent_encode(&raw, PATH_SEGMENT_ENCODE_SET).to_string()
}

fn resolve(mut request: Request) -> Result<Request> {
    let template = request.url().to_string();
    if !template.contains('{') {
        return Ok(request);
    }

    let mut params = std::mem::take(request.params_mut()).into_iter();
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template.as_str();

    while let Some((before, after)) = rest.split_once('{') {
        let (name, tail) = after.split_once('}').ok_or_else(|| {
            Error::invalid_request(format!("unclosed placeholder in `{template}`"))
        })?;
        let value = params.next().ok_or_else(|| {
            Error::invalid_request(format!(
                "no param left for placeholder `{{{name}}}` in `{template}`"
            ))
        })?;

        resolved.push_str(before);
        resolved.push_str(&segment(&value));
        rest = tail;
    }
    resolved.push_str(rest);

    request.set_params(params.collect());
    request.set_url(resolved);
    request.extensions_mut().insert(PathTemplate::new(template));
    Ok(request)
}
