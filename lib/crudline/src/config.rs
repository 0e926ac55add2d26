//! HTTP transport configuration.

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL prepended to relative request locators.
    pub base_url: Option<String>,
    /// Headers sent with every request; request headers win on conflict.
    pub headers: HashMap<String, String>,
    /// Request timeout duration.
    pub timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            headers: HashMap::new(),
            timeout: Duration::from_secs(30),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl TransportConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }

    /// Resolve a request locator against the base URL.
    ///
    /// Absolute locators (a scheme followed by an authority, such as
    /// `https://host/x`) are returned as-is. Otherwise the base URL and the
    /// locator are joined with exactly one `/`.
    #[must_use]
    pub fn resolve(&self, locator: &str) -> String {
        if is_absolute(locator) {
            return locator.to_string();
        }

        match &self.base_url {
            Some(base) if locator.is_empty() => base.clone(),
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                locator.trim_start_matches('/')
            ),
            None => locator.to_string(),
        }
    }
}

/// `users:42` or `localhost:8080/x` parse as URLs but carry no host, so they
/// stay relative.
fn is_absolute(locator: &str) -> bool {
    url::Url::parse(locator).is_ok_and(|url| url.has_host())
}

/// Builder for [`TransportConfig`].
#[derive(Debug, Clone, Default)]
pub struct TransportConfigBuilder {
    base_url: Option<String>,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl TransportConfigBuilder {
    /// Set the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> TransportConfig {
        let defaults = TransportConfig::default();
        TransportConfig {
            base_url: self.base_url,
            headers: self.headers,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn default_config() {
        let config = TransportConfig::default();
        check!(config.base_url.is_none());
        check!(config.headers.is_empty());
        check!(config.timeout == Duration::from_secs(30));
        check!(config.pool_idle_per_host == 32);
    }

    #[test]
    fn builder_overrides() {
        let config = TransportConfig::builder()
            .base_url("https://api.example.com/")
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(60))
            .pool_idle_per_host(16)
            .build();

        check!(config.base_url.as_deref() == Some("https://api.example.com/"));
        check!(config.headers.get("Accept").map(String::as_str) == Some("application/json"));
        check!(config.timeout == Duration::from_secs(60));
        check!(config.pool_idle_per_host == 16);
        check!(config.pool_idle_timeout == Duration::from_secs(90));
    }

    #[test]
    fn resolve_joins_with_single_slash() {
        let config = TransportConfig::builder().base_url("http://localhost/api/").build();
        check!(config.resolve("/list/") == "http://localhost/api/list/");
        check!(config.resolve("list") == "http://localhost/api/list");
        check!(config.resolve("") == "http://localhost/api/");
    }

    #[test]
    fn resolve_keeps_absolute_locators() {
        let config = TransportConfig::builder().base_url("http://localhost/api/").build();
        check!(config.resolve("https://other.example.com/x") == "https://other.example.com/x");
    }

    #[test]
    fn resolve_treats_hostless_urls_as_relative() {
        let config = TransportConfig::builder().base_url("http://localhost/api/").build();
        check!(config.resolve("users:42") == "http://localhost/api/users:42");
        check!(config.resolve("localhost:8080/x") == "http://localhost/api/localhost:8080/x");
    }

    #[test]
    fn resolve_without_base_url() {
        let config = TransportConfig::default();
        check!(config.resolve("/list/") == "/list/");
    }
}
