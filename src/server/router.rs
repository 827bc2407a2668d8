//! Path-based dispatch to registered handlers.

use std::sync::Arc;

use log::debug;

use crate::server::handler::{Handler, NotFound, Route};

/// An ordered set of routes.
///
/// A pattern ending in `/` matches every path under it; any other pattern
/// matches only that exact path. When several patterns match, the longest
/// one wins, so `/healthz` takes precedence over `/`.
pub struct Router {
    routes: Vec<Route>,
    fallback: Arc<dyn Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: Arc::new(NotFound),
        }
    }

    /// Register `handler` for `pattern`, replacing any previous registration.
    pub fn route(&mut self, pattern: impl Into<String>, handler: impl Handler + 'static) {
        let pattern = pattern.into();
        self.routes.retain(|route| route.pattern != pattern);
        debug!("registered route {pattern}");
        self.routes.push(Route {
            pattern,
            handler: Arc::new(handler),
        });
    }

    /// The registered patterns, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    /// The handler for `path`, falling back to a 404 handler.
    pub fn lookup(&self, path: &str) -> &dyn Handler {
        self.routes
            .iter()
            .filter(|route| route.matches(path))
            .max_by_key(|route| route.pattern.len())
            .map(|route| route.handler.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
