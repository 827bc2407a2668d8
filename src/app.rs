//! Route registration for the header-echo server.

use crate::config::AppConfig;
use crate::handlers::{EchoHandler, HealthHandler};
use crate::server::{HttpServer, LoggingMiddleware};

/// Pattern of the echo endpoint; matches every path not claimed elsewhere.
pub const ECHO_PATTERN: &str = "/";
/// Pattern of the liveness endpoint.
pub const HEALTH_PATTERN: &str = "/healthz";

/// Build the server with both endpoints wrapped in request logging.
pub fn build_server(config: AppConfig) -> HttpServer {
    let mut server = HttpServer::new(config.server);
    server.add_route(ECHO_PATTERN, LoggingMiddleware::new(EchoHandler::new(config.version)));
    server.add_route(HEALTH_PATTERN, LoggingMiddleware::new(HealthHandler));
    server
}
