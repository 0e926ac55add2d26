//! HTTP transport using hyper-util.
//!
//! [`HttpTransport`] is a terminal [`Transport`]: every operation sends the
//! request with the verb found in [`Request::http_method`] (`GET` when unset),
//! so the verb is decided by middleware such as
//! [`CrudToHttp`](crate::CrudToHttp), not by the operation itself.

use bytes::Bytes;
use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::debug;
use url::Url;

use crate::config::TransportConfig;
use crate::connector::{ConnectorFuture, Transport};
use crate::{
    Connector, Error, JSON_CONTENT_TYPE, Method, Request, Response, Result, decode_data, to_json,
};

type HyperClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// HTTP(S) client with rustls and the Mozilla root certificates.
fn hyper_client(config: &TransportConfig) -> HyperClient {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();
    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let connector = HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build();

    Client::builder(TokioExecutor::new())
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(config.pool_idle_per_host)
        .build(connector)
}

/// Terminal transport sending CRUD requests over HTTP.
///
/// - the locator is resolved against [`TransportConfig::base_url`]
/// - config headers are sent first, request headers override them
/// - `data` is sent as a JSON body
/// - 2xx responses resolve, any other status rejects with [`Error::Http`]
///
/// # Example
///
/// ```ignore
/// use crudline::{Connector, CrudToHttp, TransportConfig};
///
/// let config = TransportConfig::builder()
///     .base_url("https://api.example.com/")
///     .build();
/// let api = Connector::http(config).with(CrudToHttp::new());
///
/// let list = api.read("/list/").await?;
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    inner: HyperClient,
    config: TransportConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Create a transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with custom configuration.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        Self {
            inner: hyper_client(&config),
            config,
        }
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Merge config and request headers, the request winning on conflict.
    fn headers(&self, request: &Request) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.config.headers.iter().chain(request.headers()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::invalid_request(format!("header `{name}`: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_request(format!("header `{name}`: {e}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Build a hyper request from a crudline request.
    fn build_http_request(&self, request: &Request) -> Result<http::Request<Full<Bytes>>> {
        let url = Url::parse(&self.config.resolve(request.url()))?;
        let method = request.http_method().unwrap_or(Method::Get);
        let mut headers = self.headers(request)?;

        let body = match request.data() {
            Some(data) => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(
                        CONTENT_TYPE,
                        HeaderValue::from_static(JSON_CONTENT_TYPE),
                    );
                }
                Full::new(to_json(data)?)
            }
            None => Full::default(),
        };

        debug!(%method, %url, "sending HTTP request");

        let mut http_request = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str())
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))?;
        *http_request.headers_mut() = headers;

        Ok(http_request)
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }

    /// Send `request` and decode the response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] for non-2xx statuses, and a connection, TLS,
    /// timeout, URL, or serialization error when the request cannot complete.
    pub async fn send(&self, request: Request) -> Result<Response> {
        let http_request = self.build_http_request(&request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(http_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let (parts, body) = response.into_parts();
        let status = parts.status.as_u16();

        let body = body
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();
        let data = decode_data(&body);

        if (200..300).contains(&status) {
            Ok(Response::from_parts(status, parts.headers, data))
        } else {
            Err(Error::http(status, data))
        }
    }

    fn boxed_send(&self, request: Request) -> ConnectorFuture {
        let transport = self.clone();
        Box::pin(async move { transport.send(request).await })
    }
}

impl Transport for HttpTransport {
    fn create(&self, request: Request) -> ConnectorFuture {
        self.boxed_send(request)
    }

    fn read(&self, request: Request) -> ConnectorFuture {
        self.boxed_send(request)
    }

    fn update(&self, request: Request) -> ConnectorFuture {
        self.boxed_send(request)
    }

    fn delete(&self, request: Request) -> ConnectorFuture {
        self.boxed_send(request)
    }
}

impl Connector {
    /// Build a connector on top of an [`HttpTransport`].
    #[must_use]
    pub fn http(config: TransportConfig) -> Self {
        Self::new(HttpTransport::with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    fn header_str<'a, B>(request: &'a http::Request<B>, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn transport_is_debug() {
        let transport = HttpTransport::new();
        check!(format!("{transport:?}").contains("HttpTransport"));
    }

    #[test]
    fn build_request_merges_headers() {
        let transport = HttpTransport::with_config(
            TransportConfig::builder()
                .base_url("http://localhost/api/")
                .header("Accept", "application/json")
                .header("X-Client", "config")
                .build(),
        );
        let request = Request::builder("/list/")
            .header("X-Client", "request")
            .build();

        let_assert!(Ok(http_request) = transport.build_http_request(&request));
        check!(http_request.method() == http::Method::GET);
        check!(http_request.uri().to_string() == "http://localhost/api/list/");
        check!(header_str(&http_request, "accept") == Some("application/json"));
        check!(header_str(&http_request, "x-client") == Some("request"));
    }

    #[test]
    fn build_request_sets_json_content_type() {
        let transport = HttpTransport::new();
        let request = Request::builder("http://localhost/object/")
            .method(Method::Post)
            .data(json!({ "firstName": "Joe" }))
            .build();

        let_assert!(Ok(http_request) = transport.build_http_request(&request));
        check!(http_request.method() == http::Method::POST);
        check!(header_str(&http_request, "content-type") == Some("application/json"));
    }

    #[test]
    fn build_request_rejects_relative_url_without_base() {
        let transport = HttpTransport::new();
        let_assert!(Err(Error::InvalidUrl(_)) = transport.build_http_request(&Request::new("/list/")));
    }

    #[test]
    fn build_request_rejects_invalid_header() {
        let transport = HttpTransport::new();
        let request = Request::builder("http://localhost/")
            .header("bad header", "value")
            .build();
        let_assert!(Err(Error::InvalidRequest(_)) = transport.build_http_request(&request));
    }
}
