//! HTTP request parsing and representation.

use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::headers::HeaderMap;
use crate::parser::method::{is_token_char, Method};
use crate::parser::version::HttpVersion;

/// Represents an HTTP request.
///
/// Only the request head is parsed; bodies are framed and skipped by the
/// connection loop and never reach handlers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target from the request line
    pub target: String,
    /// The path component of the target, without the query
    pub path: String,
    /// The raw query string, if the target had one
    pub query: Option<String>,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers, in the order received
    pub headers: HeaderMap,
    /// The peer address as `host:port`; empty when unknown
    pub remote_addr: String,
}

impl HttpRequest {
    /// Create a new HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `target` - The request target
    /// * `version` - The HTTP version
    /// * `headers` - The HTTP headers
    ///
    /// # Returns
    ///
    /// A new HTTP request with no remote address, or an error if the target
    /// has no usable path
    pub fn new(method: Method, target: impl Into<String>, version: HttpVersion, headers: HeaderMap) -> Result<Self, Error> {
        let target = target.into();
        let (path, query) = split_target(&target)?;

        Ok(Self {
            method,
            path,
            query,
            target,
            version,
            headers,
            remote_addr: String::new(),
        })
    }

    /// Attach the peer address the request arrived from.
    pub fn with_remote_addr(mut self, remote_addr: impl Into<String>) -> Self {
        self.remote_addr = remote_addr.into();
        self
    }

    /// Check if a header exists (case-insensitive).
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// Whether the client wants the connection kept open after the response.
    pub fn keep_alive(&self) -> bool {
        if self.headers.has_token("Connection", "close") {
            return false;
        }
        self.version.keep_alive_by_default() || self.headers.has_token("Connection", "keep-alive")
    }

    /// The declared body length, or zero when none was declared.
    ///
    /// # Returns
    ///
    /// The body length, or an error if the Content-Length values are not one
    /// agreed-upon non-negative integer
    pub fn content_length(&self) -> Result<usize, Error> {
        let mut length: Option<usize> = None;
        for value in self.headers.get_all_bytes("Content-Length") {
            let value = String::from_utf8_lossy(value);
            for raw in value.split(',') {
                let raw = raw.trim();
                if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::InvalidContentLength(raw.to_string()));
                }
                let parsed = raw
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidContentLength(raw.to_string()))?;
                match length {
                    Some(existing) if existing != parsed => {
                        return Err(Error::InvalidContentLength(raw.to_string()));
                    }
                    _ => length = Some(parsed),
                }
            }
        }
        Ok(length.unwrap_or(0))
    }

    /// Whether the body uses a transfer coding this server cannot frame.
    pub fn has_transfer_encoding(&self) -> bool {
        self.headers.contains("Transfer-Encoding")
    }
}

/// Split a request target into path and query.
fn split_target(target: &str) -> Result<(String, Option<String>), Error> {
    if target == "*" {
        return Ok((target.to_string(), None));
    }

    // Absolute-form: drop the scheme and authority.
    let origin = match target.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() && scheme.bytes().all(|b| b.is_ascii_alphanumeric() || b"+-.".contains(&b)) => {
            match rest.find(|c: char| c == '/' || c == '?') {
                Some(idx) if rest[idx..].starts_with('/') => &rest[idx..],
                Some(idx) => return Ok(("/".to_string(), Some(rest[idx + 1..].to_string()))),
                None => "/",
            }
        }
        _ => target,
    };

    if !origin.starts_with('/') {
        return Err(Error::InvalidPath(target.to_string()));
    }

    let (path, query) = match origin.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (origin.to_string(), None),
    };
    Ok((path, query))
}

/// Find the end of the request head in `buf`.
///
/// # Returns
///
/// The number of bytes up to and including the blank line that terminates
/// the head, if the head is complete
pub fn find_head_end(buf: &[u8]) -> Option<usize> {
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4);
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|i| i + 2);
    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Parse an HTTP request head from a byte slice.
///
/// The request line and header names must be ASCII. Header values are kept
/// as bytes so obs-text survives; control characters other than horizontal
/// tab are rejected, including a bare CR.
///
/// # Arguments
///
/// * `input` - A byte slice containing the request line and headers
///
/// # Returns
///
/// The parsed HTTP request, or an error if the request is invalid
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    // Split on LF and drop the CR of each CRLF
    let mut lines = input
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        // Tolerate leading empty lines before the request line (RFC 9112 section 2.2)
        .skip_while(|line| line.is_empty());

    let request_line = match lines.next() {
        Some(line) => line,
        None => return Err(Error::EmptyRequest),
    };
    let request_line = match std::str::from_utf8(request_line) {
        Ok(line) if line.is_ascii() => line,
        _ => return Err(Error::MalformedRequestLine("Invalid UTF-8".to_string())),
    };

    // Split the request line into method, target, and version
    let parts: Vec<&str> = request_line.split(' ').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;
    let version = HttpVersion::from_str(parts[2])?;

    let mut headers = HeaderMap::new();
    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        let invalid = || Error::InvalidHeaderFormat(String::from_utf8_lossy(line).into_owned());

        let colon = line.iter().position(|&b| b == b':').ok_or_else(invalid)?;
        let (name, value) = (&line[..colon], &line[colon + 1..]);

        // Whitespace before the colon or obsolete line folding is rejected
        if name.is_empty() || !name.iter().all(|&b| is_token_char(b)) {
            return Err(invalid());
        }

        let value = trim_whitespace(value);
        if value.iter().any(|&b| is_forbidden_in_value(b)) {
            return Err(invalid());
        }

        // Token characters are ASCII, so the name is valid UTF-8
        headers.append(String::from_utf8_lossy(name).into_owned(), value);
    }

    if version == HttpVersion::Http11 && !headers.contains("Host") {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    HttpRequest::new(method, parts[1], version, headers)
}

/// Strip optional whitespace (SP and HTAB) around a field value.
fn trim_whitespace(mut value: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = value {
        value = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = value {
        value = rest;
    }
    value
}

/// Control characters other than HTAB may not appear in a field value.
fn is_forbidden_in_value(b: u8) -> bool {
    (b < 0x20 && b != b'\t') || b == 0x7f
}
