//! HTTP server implementation.
//!
//! A small HTTP/1.x server on tokio: a connection loop, a router, the
//! [`ResponseWriter`] capability handed to handlers, and the logging
//! middleware with its status-recording writer.

mod response;
mod config;
mod error;
mod handler;
mod router;
mod writer;
mod recorder;
mod middleware;
mod http_server;

// Re-export public items
pub use response::{reason_phrase, HttpResponse, StatusCode};
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::Error;
pub use handler::{Handler, HandlerFuture, NotFound};
pub use router::Router;
pub use writer::{BufferedResponse, ResponseWriter};
pub use recorder::ResponseRecorder;
pub use middleware::{caller_ip, split_host_port, LoggingMiddleware};
pub use http_server::{BoundServer, HttpServer};
