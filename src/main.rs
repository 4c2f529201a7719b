//! Prism example-selection proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ axum router ──▶ /_status ──▶ {"status": "ok"}
//!                  │
//!                  └─▶ forwarder ──▶ example registry (first token in path)
//!                          │              │
//!                          │              ▼
//!                          │         Prefer: example=... | code=...
//!                          ▼
//!                   pooled client ──▶ Prism ──▶ strip hop-by-hop ──▶ Client
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use prism_proxy::config::{load_config, Overrides};
use prism_proxy::observability::{logging, metrics};
use prism_proxy::{HttpServer, Shutdown};

#[derive(Parser, Debug)]
#[command(name = "prism-proxy", version)]
#[command(about = "Forwards requests to a Prism mock server, selecting examples by path", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Upstream base URL, e.g. http://prism:4010.
    #[arg(long, env = "UPSTREAM_HOST")]
    upstream_host: Option<String>,

    /// Address to listen on.
    #[arg(long, env = "BIND_ADDRESS")]
    bind: Option<String>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = Overrides {
        upstream_host: cli.upstream_host,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = load_config(cli.config.as_deref(), overrides).map_err(|e| {
        eprintln!("prism-proxy: {}", e);
        e
    })?;

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        "prism-proxy starting"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let bind_address: SocketAddr = config.listener.bind_address.parse()?;
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
