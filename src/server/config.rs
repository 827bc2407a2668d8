//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// The port the server listens on.
pub const DEFAULT_PORT: u16 = 8081;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The socket read buffer size.
    pub read_buffer_size: usize,
    /// The largest request head accepted before replying 431.
    pub max_header_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            read_buffer_size: 8192,
            max_header_bytes: 1 << 20,
        }
    }
}
