//! ada-relay binary: serve the boundary endpoints.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use ada_relay::config::loader;
use ada_relay::lifecycle::Shutdown;
use ada_relay::observability::{logging, metrics};
use ada_relay::HttpServer;

#[derive(Parser)]
#[command(name = "ada-relay", about = "Cardano transaction relay for an Anvil-style gateway API")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    tracing::info!("ada-relay v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = loader::load(args.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        network = %config.gateway.network,
        gateway = %config.gateway.effective_base_url(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address validity is checked by config validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
