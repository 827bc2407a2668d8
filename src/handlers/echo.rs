//! Header echo endpoint.

use log::info;

use crate::config::VersionSource;
use crate::parser::HttpRequest;
use crate::server::{Handler, HandlerFuture, ResponseWriter};

/// Name of the response header carrying the version.
pub const VERSION_HEADER: &str = "VERSION";

/// Copies every request header onto the response, adds the current version
/// and replies `test0`.
pub struct EchoHandler {
    version: VersionSource,
}

impl EchoHandler {
    pub fn new(version: VersionSource) -> Self {
        Self { version }
    }
}

impl Handler for EchoHandler {
    fn handle<'a>(&'a self, request: &'a HttpRequest, writer: &'a mut dyn ResponseWriter) -> HandlerFuture<'a> {
        Box::pin(async move {
            info!("Processing test0");

            let headers = writer.headers_mut();
            for (name, value) in &request.headers {
                headers.append(name, value);
            }
            headers.append(VERSION_HEADER, self.version.current());

            let _ = writer.write(b"test0");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_request;
    use crate::server::BufferedResponse;

    #[tokio::test]
    async fn test_echoes_headers_and_version() {
        let request = parse_request(b"GET / HTTP/1.1\r\nHost: h\r\nX-Test: a\r\nX-Test: b\r\n\r\n").unwrap();
        let handler = EchoHandler::new(VersionSource::Fixed("v9".to_string()));

        let mut writer = BufferedResponse::new();
        handler.handle(&request, &mut writer).await;
        let response = writer.into_response();

        assert_eq!(response.status.as_u16(), 200);
        assert_eq!(response.body, b"test0");
        assert_eq!(response.headers.get("Host"), Some("h"));
        assert_eq!(response.headers.get_all("X-Test").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(response.headers.get("VERSION"), Some("v9"));
    }

    #[tokio::test]
    async fn test_empty_version_still_sets_header() {
        let request = parse_request(b"GET / HTTP/1.0\r\n\r\n").unwrap();
        let handler = EchoHandler::new(VersionSource::Fixed(String::new()));

        let mut writer = BufferedResponse::new();
        handler.handle(&request, &mut writer).await;
        let response = writer.into_response();

        assert_eq!(response.headers.get_all("VERSION").collect::<Vec<_>>(), vec![""]);
    }
}
