//! Request logging middleware.

use log::info;

use crate::parser::HttpRequest;
use crate::server::handler::{Handler, HandlerFuture};
use crate::server::recorder::ResponseRecorder;
use crate::server::response::reason_phrase;
use crate::server::writer::ResponseWriter;

/// Logs every request before it is handled and its status afterwards.
///
/// The wrapped handler sees the original request and a [`ResponseRecorder`]
/// in place of the real writer. Panics in the inner handler are not caught.
pub struct LoggingMiddleware<H> {
    inner: H,
}

impl<H: Handler> LoggingMiddleware<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for LoggingMiddleware<H> {
    fn handle<'a>(&'a self, request: &'a HttpRequest, writer: &'a mut dyn ResponseWriter) -> HandlerFuture<'a> {
        Box::pin(async move {
            let ip = caller_ip(&request.remote_addr);
            info!("{}", request_message(&request.method.to_string(), &request.path, ip));

            let mut recorder = ResponseRecorder::new(writer);
            self.inner.handle(request, &mut recorder).await;

            info!("{}", response_message(recorder.status()));
        })
    }
}

/// The log line emitted before a request is handled.
pub fn request_message(method: &str, path: &str, ip: &str) -> String {
    format!("--> [Request] Method:{method} Path:{path} IP:{ip}")
}

/// The log line emitted after a request was handled.
pub fn response_message(status: u16) -> String {
    format!("<-- [Response] {status} {}", reason_phrase(status))
}

/// The host part of a `host:port` address, or `""` if it cannot be split.
pub fn caller_ip(remote_addr: &str) -> &str {
    split_host_port(remote_addr).map(|(host, _)| host).unwrap_or("")
}

/// Split `host:port` or `[host]:port` into its two parts.
///
/// IPv6 hosts must be bracketed; an unbracketed host containing a colon,
/// a missing port separator, or stray brackets all fail.
pub fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        let port = after.strip_prefix(':')?;
        (host, port)
    } else {
        let (host, port) = addr.rsplit_once(':')?;
        if host.contains(':') {
            return None;
        }
        (host, port)
    };

    if host.contains(['[', ']']) || port.contains(['[', ']']) {
        return None;
    }
    Some((host, port))
}
