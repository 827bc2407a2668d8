//! The request handler trait and route entries.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::HttpRequest;
use crate::server::writer::ResponseWriter;

/// Type alias for the boxed future a handler returns.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// A unit of logic that consumes one request and writes one response.
///
/// Middleware implements this trait too and owns the handler it wraps, so
/// a chain is assembled explicitly when routes are registered.
pub trait Handler: Send + Sync {
    fn handle<'a>(&'a self, request: &'a HttpRequest, writer: &'a mut dyn ResponseWriter) -> HandlerFuture<'a>;
}

/// Represents a route in the HTTP server.
pub struct Route {
    /// The pattern to match; a trailing `/` matches the whole subtree.
    pub pattern: String,
    /// The handler function.
    pub handler: Arc<dyn Handler>,
}

impl Route {
    /// Whether this route's pattern covers `path`.
    pub fn matches(&self, path: &str) -> bool {
        if self.pattern.ends_with('/') {
            path.starts_with(&self.pattern)
        } else {
            path == self.pattern
        }
    }
}

/// Replies `404 Not Found` to every request.
pub struct NotFound;

impl Handler for NotFound {
    fn handle<'a>(&'a self, _request: &'a HttpRequest, writer: &'a mut dyn ResponseWriter) -> HandlerFuture<'a> {
        Box::pin(async move {
            let headers = writer.headers_mut();
            headers.insert("Content-Type", "text/plain; charset=utf-8");
            headers.insert("X-Content-Type-Options", "nosniff");
            writer.set_status(404);
            let _ = writer.write(b"404 page not found\n");
        })
    }
}
