//! A minimal HTTP server that echoes request headers and reports liveness.
//!
//! Two endpoints are served, both wrapped in [`server::LoggingMiddleware`]:
//!
//! - `/` copies every request header onto the response, adds a `VERSION`
//!   header taken from the environment and replies `test0`.
//! - `/healthz` replies `healthz`.
//!
//! The HTTP/1.x listener, request parser and response writer are part of
//! this crate.
//!
//! # Examples
//!
//! ```
//! use header_echo::{build_server, AppConfig, VersionSource};
//!
//! let config = AppConfig {
//!     version: VersionSource::Fixed("1.0.0".to_string()),
//!     ..AppConfig::default()
//! };
//! let server = build_server(config);
//! let patterns: Vec<&str> = server.router().patterns().collect();
//! assert_eq!(patterns, vec!["/", "/healthz"]);
//! ```
//!
//! Starting it binds port 8081 and serves until the process is killed:
//!
//! ```no_run
//! use header_echo::{build_server, AppConfig};
//!
//! # async fn run() -> Result<(), header_echo::ServerError> {
//! let server = build_server(AppConfig::from_env()).bind().await?;
//! server.serve().await;
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

pub mod app;
pub mod config;
pub mod handlers;

// Re-export commonly used items for convenience
pub use app::build_server;
pub use config::{AppConfig, VersionSource};
pub use parser::{Error as ParserError, HeaderMap, HttpRequest, HttpVersion, Method, parse_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
