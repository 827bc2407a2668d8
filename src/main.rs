//! header-echo: echoes request headers on `/` and answers liveness probes
//! on `/healthz`, listening on port 8081.

use std::process;

use header_echo::{build_server, AppConfig};
use log::{error, info};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    info!("NOW VERSION: {}", config.version.current());

    let server = match build_server(config).bind().await {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to start listener: {e}");
            process::exit(1);
        }
    };

    server.serve().await;
}
