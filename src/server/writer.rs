//! The response-writing capability handed to handlers.

use std::io;

use log::warn;

use crate::parser::HeaderMap;
use crate::server::response::{HttpResponse, StatusCode};

/// Destination a handler writes its response into.
///
/// Handlers set headers first, then optionally a status, then write the
/// body. The first call to [`set_status`](ResponseWriter::set_status) or
/// [`write`](ResponseWriter::write) commits the status line and headers;
/// header changes made after that point are not transmitted.
pub trait ResponseWriter: Send {
    /// The header collection of the response being built.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Set the numeric status code.
    fn set_status(&mut self, code: u16);

    /// Append bytes to the response body.
    ///
    /// Commits an implicit `200 OK` when no status was set beforehand.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// A [`ResponseWriter`] that collects the whole response in memory.
///
/// The connection loop turns it into an [`HttpResponse`] once the handler
/// returns.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: HeaderMap,
    committed: Option<(StatusCode, HeaderMap)>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed status, if a status was set or the body written.
    pub fn status(&self) -> Option<StatusCode> {
        self.committed.as_ref().map(|(status, _)| *status)
    }

    fn commit(&mut self, status: StatusCode) {
        if self.committed.is_none() {
            self.committed = Some((status, self.headers.clone()));
        }
    }

    /// Finish the response with server-owned framing headers applied.
    ///
    /// `Content-Length` always reflects the buffered body and any handler
    /// supplied `Transfer-Encoding` is dropped. A plain-text content type is
    /// added when the handler wrote a body without naming one.
    pub fn into_response(mut self) -> HttpResponse {
        self.commit(StatusCode::OK);
        let (status, mut headers) = self.committed.take().unwrap_or_default();

        headers.remove("Transfer-Encoding");
        headers.remove("Content-Length");

        let mut body = self.body;
        if status.allows_body() {
            if !body.is_empty() && !headers.contains("Content-Type") {
                headers.append("Content-Type", "text/plain; charset=utf-8");
            }
            headers.append("Content-Length", body.len().to_string());
        } else {
            body.clear();
        }

        HttpResponse { status, headers, body }
    }
}

impl ResponseWriter for BufferedResponse {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_status(&mut self, code: u16) {
        if let Some((status, _)) = &self.committed {
            warn!("superfluous set_status({code}) call, response already committed with {status}");
            return;
        }
        match StatusCode::from_u16(code) {
            Some(status) => self.commit(status),
            None => warn!("ignoring invalid status code {code}"),
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.commit(StatusCode::OK);
        let status = self.status().unwrap_or_default();
        if !status.allows_body() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("response status {status} does not allow a body"),
            ));
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
