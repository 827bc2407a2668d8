//! Liveness endpoint.

use log::info;

use crate::parser::HttpRequest;
use crate::server::{Handler, HandlerFuture, ResponseWriter};

/// Replies `healthz` whenever the process can answer HTTP at all.
pub struct HealthHandler;

impl Handler for HealthHandler {
    fn handle<'a>(&'a self, _request: &'a HttpRequest, writer: &'a mut dyn ResponseWriter) -> HandlerFuture<'a> {
        Box::pin(async move {
            info!("Processing healthz");
            let _ = writer.write(b"healthz");
        })
    }
}
