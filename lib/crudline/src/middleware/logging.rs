//! Operation logging middleware.
//!
//! This middleware logs every operation and its outcome using the `tracing`
//! crate. Requests, responses, and errors pass through untouched.

use std::time::Instant;

use tracing::{Instrument, Level, debug, info, span, warn};

use crate::middleware::{Middleware, PartialConnector};
use crate::{Connector, Operation};

/// Layer that adds operation logging.
///
/// # Example
///
/// ```ignore
/// use crudline::{Connector, LoggingLayer};
///
/// let connector = Connector::new(transport).with(LoggingLayer::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (request details).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// Configured log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Middleware for LoggingLayer {
    fn wrap(&self, next: Connector) -> PartialConnector {
        let level = self.level;
        Operation::ALL
            .into_iter()
            .fold(PartialConnector::new(), |partial, operation| {
                let next = next.clone();
                partial.on(operation, move |request| {
                    let next = next.clone();
                    let url = request.url().to_string();
                    let span = span!(Level::INFO, "crud_request", %operation, %url);

                    async move {
                        let start = Instant::now();

                        match level {
                            LogLevel::Debug => {
                                debug!(
                                    %operation,
                                    %url,
                                    method = ?request.http_method(),
                                    params = ?request.params(),
                                    headers = ?request.headers(),
                                    "sending request"
                                );
                            }
                            LogLevel::Info => {
                                info!(%operation, %url, "sending request");
                            }
                        }

                        let result = next.execute(operation, request).await;

                        // Saturating conversion to u64
                        let elapsed_ms =
                            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                        match &result {
                            Ok(response) => {
                                let status = response.status();
                                info!(status, elapsed_ms, "request completed");
                            }
                            Err(err) => {
                                warn!(error = %err, elapsed_ms, "request failed");
                            }
                        }

                        result
                    }
                    .instrument(span)
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn logging_layer_default() {
        check!(LoggingLayer::new().level() == LogLevel::Info);
    }

    #[test]
    fn logging_layer_debug() {
        check!(LoggingLayer::debug().level() == LogLevel::Debug);
    }
}
