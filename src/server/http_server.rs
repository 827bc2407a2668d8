//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use log::{debug, error, info, warn};

use crate::parser::{find_head_end, parse_request, Error as ParserError, Method};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::Handler;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::router::Router;
use crate::server::writer::BufferedResponse;

/// An HTTP server that is still being configured.
///
/// Routes can only be added in this state; [`HttpServer::bind`] moves the
/// server into the serving state as a [`BoundServer`].
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            router: Router::new(),
        }
    }

    /// Add a route to the server.
    pub fn add_route(&mut self, pattern: impl Into<String>, handler: impl Handler + 'static) {
        self.router.route(pattern, handler);
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Log the registered endpoints.
    fn display_server_info(&self) {
        info!("Registered endpoints:");
        for pattern in self.router.patterns() {
            info!("  {pattern}");
        }
    }

    /// Bind the TCP listener.
    ///
    /// # Returns
    ///
    /// The server in its serving state, or [`Error::Bind`] if the address
    /// is in use or cannot be bound
    pub async fn bind(self) -> Result<BoundServer, Error> {
        self.display_server_info();

        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        info!("Server listening on http://{addr}");

        Ok(BoundServer {
            listener,
            router: Arc::new(self.router),
            config: Arc::new(self.config),
        })
    }

    /// Serve HTTP/1.x requests on one connection until it closes.
    ///
    /// Requests are read one after another on the same connection while
    /// both sides want to keep it open. Request bodies are skipped.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        remote_addr: &str,
        router: &Router,
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut buf: Vec<u8> = Vec::with_capacity(config.read_buffer_size);
        let mut chunk = vec![0; config.read_buffer_size];

        loop {
            // Read until the end of the request head
            let head_end = loop {
                let blank = buf.iter().take_while(|b| matches!(b, b'\r' | b'\n')).count();
                buf.drain(..blank);

                if let Some(end) = find_head_end(&buf) {
                    break end;
                }
                if buf.len() >= config.max_header_bytes {
                    let err = ParserError::HeadersTooLarge(config.max_header_bytes);
                    socket.write_all(&error_response(&err).to_bytes()).await?;
                    return Err(err.into());
                }

                let n = socket.read(&mut chunk).await?;
                if n == 0 {
                    if !buf.is_empty() {
                        debug!("connection from {remote_addr} closed mid-request");
                    }
                    return Ok(()); // Connection closed
                }
                buf.extend_from_slice(&chunk[..n]);
            };

            if head_end > config.max_header_bytes {
                let err = ParserError::HeadersTooLarge(config.max_header_bytes);
                socket.write_all(&error_response(&err).to_bytes()).await?;
                return Err(err.into());
            }

            let head: Vec<u8> = buf.drain(..head_end).collect();
            let parsed = parse_request(&head).and_then(|req| {
                let content_length = req.content_length()?;
                Ok((req, content_length))
            });
            let (request, content_length) = match parsed {
                Ok((req, content_length)) => (req.with_remote_addr(remote_addr), content_length),
                Err(e) => {
                    socket.write_all(&error_response(&e).to_bytes()).await?;
                    return Err(Error::ParseError(e));
                }
            };

            // Without a reliable body boundary the connection cannot be reused
            let reusable = !request.has_transfer_encoding() && !request.has_header("Expect");
            let keep_alive = request.keep_alive() && reusable;

            let mut writer = BufferedResponse::new();
            router.lookup(&request.path).handle(&request, &mut writer).await;

            let mut response = writer.into_response();
            if request.method == Method::HEAD {
                response.body.clear();
            }
            if !keep_alive {
                response.headers.insert("Connection", "close");
            }

            socket.write_all(&response.to_bytes()).await?;
            socket.flush().await?;

            if !keep_alive {
                return Ok(());
            }

            if !Self::discard_body(socket, &mut buf, &mut chunk, content_length).await? {
                return Ok(());
            }
        }
    }

    /// Drop `remaining` body bytes, keeping anything read past them.
    ///
    /// # Returns
    ///
    /// `false` if the peer closed the connection before the body ended
    async fn discard_body(
        socket: &mut (impl AsyncRead + Unpin),
        buf: &mut Vec<u8>,
        chunk: &mut [u8],
        mut remaining: usize,
    ) -> Result<bool, Error> {
        let buffered = remaining.min(buf.len());
        buf.drain(..buffered);
        remaining -= buffered;

        while remaining > 0 {
            let n = socket.read(chunk).await?;
            if n == 0 {
                return Ok(false);
            }
            let used = n.min(remaining);
            remaining -= used;
            buf.extend_from_slice(&chunk[used..n]);
        }
        Ok(true)
    }
}

/// A server whose listener is bound and ready to accept connections.
pub struct BoundServer {
    listener: TcpListener,
    router: Arc<Router>,
    config: Arc<ServerConfig>,
}

impl BoundServer {
    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, one task per connection.
    pub async fn serve(self) {
        loop {
            match self.listener.accept().await {
                Ok((mut socket, addr)) => {
                    let router = self.router.clone();
                    let config = self.config.clone();

                    tokio::spawn(async move {
                        let remote_addr = addr.to_string();
                        match HttpServer::handle_connection(&mut socket, &remote_addr, &router, &config).await {
                            Ok(()) => {}
                            Err(Error::ParseError(e)) => warn!("Bad request from {remote_addr}: {e}"),
                            Err(e) => debug!("Error handling connection from {remote_addr}: {e}"),
                        }
                    });
                }
                Err(e) => Self::handle_accept_error(e).await,
            }
        }
    }

    /// Back off briefly after a failed accept, e.g. when out of descriptors.
    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
}

/// The response sent when a request head cannot be parsed.
pub(crate) fn error_response(err: &ParserError) -> HttpResponse {
    let status = match err {
        ParserError::HeadersTooLarge(_) => StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
        ParserError::UnsupportedVersion(_) => StatusCode::HTTP_VERSION_NOT_SUPPORTED,
        _ => StatusCode::BAD_REQUEST,
    };

    HttpResponse::new(status)
        .with_content_type("text/plain; charset=utf-8")
        .with_header("Connection", "close")
        .with_body_string(format!("{status}: {err}"))
}
