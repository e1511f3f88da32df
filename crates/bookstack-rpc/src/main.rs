//! Bookstack RPC Server - REST frontend for the catalog core.
//!
//! This binary exposes the `bookstack-core` facade over HTTP. All catalog
//! state is in-memory and scoped to this process.

use anyhow::Result;
use bookstack_rpc::server;
use bookstack_core::config::ServerConfig;
use bookstack_core::LibraryService;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bookstack-rpc")]
#[command(about = "REST server for the Bookstack catalog")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Bookstack RPC Server");

    let service = LibraryService::new();
    let addr = server::start_server(service, &args.host, args.port).await?;

    info!("Catalog server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
