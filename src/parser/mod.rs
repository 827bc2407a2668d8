//! HTTP parser module.
//!
//! This module parses HTTP/1.x request heads into [`HttpRequest`] values
//! with ordered, multi-valued headers.

mod request;
mod method;
mod version;
mod headers;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use version::HttpVersion;
pub use headers::HeaderMap;
pub use error::Error;

pub use request::{find_head_end, parse_request};
