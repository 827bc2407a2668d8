//! A pass-through response writer that remembers the status code.

use std::io;

use crate::parser::HeaderMap;
use crate::server::writer::ResponseWriter;

/// Wraps another [`ResponseWriter`] and records the status code set on it.
///
/// Every call is forwarded unchanged. The recorded status starts at `200`,
/// the status implied when a handler writes a body without setting one,
/// and is overwritten by each `set_status` call, so after the handler
/// returns it holds the most recently requested code.
pub struct ResponseRecorder<'a> {
    inner: &'a mut dyn ResponseWriter,
    status: u16,
}

impl<'a> ResponseRecorder<'a> {
    pub fn new(inner: &'a mut dyn ResponseWriter) -> Self {
        Self { inner, status: 200 }
    }

    /// The last status code a handler set, or `200` if it set none.
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl ResponseWriter for ResponseRecorder<'_> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn set_status(&mut self, code: u16) {
        self.status = code;
        self.inner.set_status(code);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
}
