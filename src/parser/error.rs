//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The method token contains characters not allowed in an HTTP token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request target is missing or not an origin-form path.
    #[error("Invalid HTTP path: {0}")]
    InvalidPath(String),

    /// The request line is malformed (wrong format or missing components).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The protocol token is not of the form `HTTP/x.y`.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A well-formed HTTP version that this server does not speak.
    #[error("Unsupported HTTP version: {0}")]
    UnsupportedVersion(String),

    /// A required header is missing from the request.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// A header line has an invalid format.
    #[error("Invalid header format: {0}")]
    InvalidHeaderFormat(String),

    /// The request head exceeded the configured size limit.
    #[error("Request header fields too large (limit {0} bytes)")]
    HeadersTooLarge(usize),

    /// The Content-Length header is not a single non-negative integer.
    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,
}
