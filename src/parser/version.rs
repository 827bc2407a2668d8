//! HTTP protocol versions.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// HTTP protocol versions this server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    Http11,
}

impl HttpVersion {
    /// Whether a connection stays open after the response unless told otherwise.
    pub fn keep_alive_by_default(&self) -> bool {
        matches!(self, HttpVersion::Http11)
    }
}

impl FromStr for HttpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP/1.0" => Ok(HttpVersion::Http10),
            "HTTP/1.1" => Ok(HttpVersion::Http11),
            _ => {
                let digits = s.strip_prefix("HTTP/").and_then(|v| v.split_once('.'));
                match digits {
                    Some((major, minor))
                        if !major.is_empty()
                            && !minor.is_empty()
                            && major.bytes().all(|b| b.is_ascii_digit())
                            && minor.bytes().all(|b| b.is_ascii_digit()) =>
                    {
                        Err(Error::UnsupportedVersion(s.to_string()))
                    }
                    _ => Err(Error::InvalidVersion(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVersion::Http10 => write!(f, "HTTP/1.0"),
            HttpVersion::Http11 => write!(f, "HTTP/1.1"),
        }
    }
}
